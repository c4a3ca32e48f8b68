//! Calibration Jacobian function.

use nalgebra::DMatrix;
use tracing::trace;

use crate::config::CalibrationConfig;
use crate::error::CalibrationResult;
use crate::layout::ParameterBlockLayout;
use crate::parallel::evaluate_instruments;
use crate::parameter_sensitivity::ParameterUnderlyingSensitivityCalculator;
use crate::problem::CalibrationProblem;

/// Maps a parameter vector to the matrix of instrument sensitivities.
///
/// Row `i` is instrument `i`; columns follow the clean parameter layout,
/// which for curves built one level deep is the builder's parameter order.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationJacobianFunction<'a> {
    problem: &'a CalibrationProblem,
    config: &'a CalibrationConfig,
    calculator: ParameterUnderlyingSensitivityCalculator,
}

impl<'a> CalibrationJacobianFunction<'a> {
    /// Creates a Jacobian function over `problem`.
    pub fn new(problem: &'a CalibrationProblem, config: &'a CalibrationConfig) -> Self {
        Self {
            problem,
            config,
            calculator: ParameterUnderlyingSensitivityCalculator::new(),
        }
    }

    /// Returns the Jacobian at `parameters`.
    pub fn evaluate(&self, parameters: &[f64]) -> CalibrationResult<DMatrix<f64>> {
        let curves = self.problem.merged_curves(parameters)?;
        let layout = ParameterBlockLayout::new(&curves, self.problem.fixed_curves())?;

        let rows = evaluate_instruments(self.problem.instruments(), self.config, |instrument| {
            self.calculator.calculate_with_layout(instrument, &layout, &curves)
        })?;

        let mut jacobian = DMatrix::zeros(rows.len(), layout.clean_len());
        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                jacobian[(i, j)] = *value;
            }
        }
        trace!(rows = jacobian.nrows(), columns = jacobian.ncols(), "evaluated jacobian");
        Ok(jacobian)
    }
}
