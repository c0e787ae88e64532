/// Tunables for [`CalibrationSolver`](super::CalibrationSolver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Equations with more operands than this are refused rather than
    /// enumerated; the value count grows as `k^(n-1)`.
    pub max_operands: usize,
}

pub const DEFAULT_MAX_OPERANDS: usize = 16;

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_operands: DEFAULT_MAX_OPERANDS,
        }
    }
}
