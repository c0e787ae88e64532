use num_bigint::BigUint;
use thiserror::Error;

use crate::equation::ParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Equation with target {target} has {count} operands (limit is {max})")]
    TooManyOperands {
        target: BigUint,
        count: usize,
        max: usize,
    },
}
