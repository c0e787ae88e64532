mod config;
mod core;
mod errors;
mod search;

pub use config::{DEFAULT_MAX_OPERANDS, SolverConfig};
pub use self::core::CalibrationSolver;
pub use errors::SolverError;
pub use search::{enumerate_values, is_valid};
