use num_bigint::BigUint;

use crate::equation::errors::ParseError;

/// A target value and the operands that may combine to produce it
///
/// Operand order is significant: operators are applied left to right in the
/// order the operands appear. There is always at least one operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    target: BigUint,
    operands: Vec<BigUint>,
}

impl Equation {
    /// # Errors
    ///
    /// Returns [`ParseError::MissingOperands`] if `operands` is empty.
    pub fn new(target: BigUint, operands: Vec<BigUint>) -> Result<Self, ParseError> {
        if operands.is_empty() {
            return Err(ParseError::MissingOperands { line: 0 });
        }
        Ok(Self { target, operands })
    }

    pub fn target(&self) -> &BigUint {
        &self.target
    }

    pub fn operands(&self) -> &[BigUint] {
        &self.operands
    }
}
