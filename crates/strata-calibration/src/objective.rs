//! Calibration objective function.

use tracing::trace;

use crate::config::CalibrationConfig;
use crate::error::CalibrationResult;
use crate::parallel::evaluate_instruments;
use crate::problem::CalibrationProblem;

/// Maps a parameter vector to the value of every calibration instrument.
///
/// Each call builds a fresh bundle; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationObjectiveFunction<'a> {
    problem: &'a CalibrationProblem,
    config: &'a CalibrationConfig,
}

impl<'a> CalibrationObjectiveFunction<'a> {
    /// Creates an objective function over `problem`.
    pub fn new(problem: &'a CalibrationProblem, config: &'a CalibrationConfig) -> Self {
        Self { problem, config }
    }

    /// Returns instrument values, in instrument order, for `parameters`.
    pub fn evaluate(&self, parameters: &[f64]) -> CalibrationResult<Vec<f64>> {
        let curves = self.problem.merged_curves(parameters)?;
        let values = evaluate_instruments(self.problem.instruments(), self.config, |instrument| {
            instrument.price(&curves)
        })?;
        trace!(instruments = values.len(), "evaluated objective");
        Ok(values)
    }
}
