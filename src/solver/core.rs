use log::{debug, info, warn};
use num_bigint::BigUint;

use crate::equation::Equation;
use crate::operator::OperatorSet;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::search::is_valid;

/// Checks calibration equations and totals the ones that can be satisfied
pub struct CalibrationSolver {
    config: SolverConfig,
}

impl CalibrationSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check a single equation.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TooManyOperands`] instead of enumerating an
    /// equation longer than `max_operands`.
    pub fn check(&self, equation: &Equation, operators: OperatorSet) -> Result<bool, SolverError> {
        let count = equation.operands().len();
        if count > self.config.max_operands {
            warn!(
                "Refusing to enumerate {} operands (limit {})",
                count, self.config.max_operands
            );
            return Err(SolverError::TooManyOperands {
                target: equation.target().clone(),
                count,
                max: self.config.max_operands,
            });
        }

        Ok(is_valid(equation, operators))
    }

    /// Sum the targets of every equation that can be satisfied under `operators`.
    ///
    /// # Errors
    ///
    /// Fails on the first equation that exceeds the operand limit; no partial
    /// total is returned.
    pub fn calibration_total(
        &self,
        equations: &[Equation],
        operators: OperatorSet,
    ) -> Result<BigUint, SolverError> {
        info!(
            "Checking {} equations with operators {}",
            equations.len(),
            operators
        );

        let mut total = BigUint::default();
        let mut valid_count = 0;

        for equation in equations {
            if self.check(equation, operators)? {
                debug!("Valid: {}", equation);
                valid_count += 1;
                total += equation.target();
            }
        }

        info!(
            "{} of {} equations valid with {}, total {}",
            valid_count,
            equations.len(),
            operators,
            total
        );
        Ok(total)
    }
}

impl Default for CalibrationSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
