use clap::ValueEnum;
use num_bigint::BigUint;

use crate::utils::concat_digits;

/// A binary operator applied strictly left to right, with no precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Multiply,
    Concat,
}

impl Operator {
    pub fn apply(self, left: &BigUint, right: &BigUint) -> BigUint {
        match self {
            Operator::Add => left + right,
            Operator::Multiply => left * right,
            Operator::Concat => concat_digits(left, right),
        }
    }
}

/// The operators available when searching for a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OperatorSet {
    /// `+` and `*`
    AddMultiply,
    /// `+`, `*` and `||`
    AddMultiplyConcat,
}

const ADD_MULTIPLY: &[Operator] = &[Operator::Add, Operator::Multiply];
const ADD_MULTIPLY_CONCAT: &[Operator] = &[Operator::Add, Operator::Multiply, Operator::Concat];

impl OperatorSet {
    pub fn from_allow_concat(allow_concat: bool) -> Self {
        if allow_concat {
            OperatorSet::AddMultiplyConcat
        } else {
            OperatorSet::AddMultiply
        }
    }

    /// Operators in the order they are tried: add, multiply, then concat.
    pub fn operators(self) -> &'static [Operator] {
        match self {
            OperatorSet::AddMultiply => ADD_MULTIPLY,
            OperatorSet::AddMultiplyConcat => ADD_MULTIPLY_CONCAT,
        }
    }

    pub fn allows_concat(self) -> bool {
        self.operators().contains(&Operator::Concat)
    }

    pub fn len(self) -> usize {
        self.operators().len()
    }

    pub fn is_empty(self) -> bool {
        self.operators().is_empty()
    }
}
