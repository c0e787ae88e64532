//! Property-based tests for the enumerator and parser
//!
//! These tests verify:
//! - Enabling concatenation never makes a valid equation invalid
//! - The enumerator yields exactly k^(n-1) values
//! - Display -> parse round-trips equations

use bridge_repair::{Equation, OperatorSet, enumerate_values, is_valid, parse_equations};
use num_bigint::BigUint;
use proptest::prelude::*;

/// Strategy for short operand lists with small values
fn operands_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1000, 1..7)
}

fn operator_set_strategy() -> impl Strategy<Value = OperatorSet> {
    prop_oneof![
        Just(OperatorSet::AddMultiply),
        Just(OperatorSet::AddMultiplyConcat),
    ]
}

fn to_big(values: &[u64]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

proptest! {
    /// Every value reachable without concat is still reachable with it
    #[test]
    fn concat_only_adds_values(operands in operands_strategy(), pick in any::<prop::sample::Index>()) {
        let operands = to_big(&operands);
        let reachable = enumerate_values(&operands, OperatorSet::AddMultiply);
        let target = pick.get(&reachable).clone();

        let equation = Equation::new(target, operands);
        prop_assert!(equation.is_ok());
        if let Ok(equation) = equation {
            prop_assert!(is_valid(&equation, OperatorSet::AddMultiply));
            prop_assert!(is_valid(&equation, OperatorSet::AddMultiplyConcat));
        }
    }

    /// Validity is monotone in the operator set for arbitrary targets
    #[test]
    fn validity_is_monotone(target in 0u64..100_000, operands in operands_strategy()) {
        let equation = Equation::new(BigUint::from(target), to_big(&operands));
        prop_assert!(equation.is_ok());
        if let Ok(equation) = equation {
            if is_valid(&equation, OperatorSet::AddMultiply) {
                prop_assert!(is_valid(&equation, OperatorSet::AddMultiplyConcat));
            }
        }
    }

    /// |enumerate_values| is 1 for a single operand, otherwise k^(n-1)
    #[test]
    fn enumeration_size(operands in operands_strategy(), operators in operator_set_strategy()) {
        let n = operands.len();
        let values = enumerate_values(&to_big(&operands), operators);
        let expected = if n == 1 { 1 } else { operators.len().pow((n - 1) as u32) };
        prop_assert_eq!(values.len(), expected);
    }

    /// Rendering N equations and parsing them back yields the same N equations in order
    #[test]
    fn display_parse_round_trip(
        rows in prop::collection::vec((any::<u64>(), operands_strategy()), 0..10)
    ) {
        let equations: Vec<Equation> = rows
            .iter()
            .filter_map(|(target, operands)| Equation::new(BigUint::from(*target), to_big(operands)).ok())
            .collect();
        let text: String = equations.iter().map(|eq| format!("{}\n", eq)).collect();

        let parsed = parse_equations(&text);
        prop_assert_eq!(parsed, Ok(equations));
    }
}
