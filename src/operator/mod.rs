//! Binary operators that can be placed between operands

mod display;
mod ops;

pub use ops::{Operator, OperatorSet};
