//! Calibration equations and the parser that reads them

mod ast;
mod display;
mod errors;
mod parse;

pub use ast::Equation;
pub use errors::ParseError;
pub use parse::{parse_equations, parse_line};
