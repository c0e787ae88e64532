use log::trace;
use num_bigint::BigUint;

use crate::equation::Equation;
use crate::operator::OperatorSet;

/// Every value reachable by placing one operator between each pair of
/// adjacent operands, folded left to right.
///
/// Duplicates are kept: for `n >= 2` operands the result always holds
/// `k^(n-1)` values, `k` being the size of the operator set. An empty slice
/// yields no values and a single operand yields itself.
pub fn enumerate_values(operands: &[BigUint], operators: OperatorSet) -> Vec<BigUint> {
    let Some((last, prefix)) = operands.split_last() else {
        return Vec::new();
    };
    if prefix.is_empty() {
        return vec![last.clone()];
    }

    let values = enumerate_values(prefix, operators);
    let mut out = Vec::with_capacity(values.len() * operators.len());
    for value in &values {
        for op in operators.operators() {
            out.push(op.apply(value, last));
        }
    }

    trace!(
        "{} operands under {} reach {} values",
        operands.len(),
        operators,
        out.len()
    );
    out
}

/// Whether the equation's target is reachable under `operators`.
pub fn is_valid(equation: &Equation, operators: OperatorSet) -> bool {
    enumerate_values(equation.operands(), operators).contains(equation.target())
}
