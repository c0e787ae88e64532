use thiserror::Error;

/// Errors raised while reading calibration equations. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing ':' between target and operands: {content:?}")]
    MissingColon { line: usize, content: String },
    #[error("line {line}: invalid target value {token:?}")]
    InvalidTarget { line: usize, token: String },
    #[error("line {line}: invalid operand {token:?}")]
    InvalidOperand { line: usize, token: String },
    #[error("line {line}: equation has no operands")]
    MissingOperands { line: usize },
}
