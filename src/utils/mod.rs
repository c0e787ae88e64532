//! Digit-level helpers shared by the operators

mod digits;

pub use digits::{concat_digits, digit_count};
