//! Bridge Repair - decide which calibration equations can be satisfied
//!
//! Each equation is a target value and an ordered list of operands. An equation
//! is valid when some choice of operators placed between the operands, evaluated
//! strictly left to right, produces the target. Two operator sets are supported:
//! `{+, *}` and `{+, *, ||}` where `||` joins the decimal digits of its operands.

pub mod equation;
pub mod operator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use equation::{Equation, ParseError, parse_equations};
pub use operator::{Operator, OperatorSet};
pub use solver::{CalibrationSolver, SolverConfig, SolverError, enumerate_values, is_valid};

use num_bigint::BigUint;

/// Sum the targets of every valid equation in `text` under `operators`
///
/// This is a convenience function that parses the input and runs a default
/// solver over it.
///
/// # Errors
///
/// This function will return an error if:
/// * A non-blank line is malformed
/// * An equation has more operands than the default solver allows
///
/// # Examples
///
/// ```
/// use bridge_repair::{OperatorSet, total_calibration};
///
/// let input = "190: 10 19\n83: 17 5\n156: 15 6\n";
/// let part1 = total_calibration(input, OperatorSet::AddMultiply).unwrap();
/// let part2 = total_calibration(input, OperatorSet::AddMultiplyConcat).unwrap();
/// assert_eq!(part1.to_string(), "190");
/// assert_eq!(part2.to_string(), "346");
/// ```
pub fn total_calibration(text: &str, operators: OperatorSet) -> Result<BigUint, SolverError> {
    let equations = parse_equations(text)?;

    let solver = CalibrationSolver::default();
    solver.calibration_total(&equations, operators)
}
