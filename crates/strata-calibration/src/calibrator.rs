//! Multi-curve calibration driver.
//!
//! Runs [`NewtonVectorRootFinder`] on the objective and Jacobian functions
//! until every instrument reprices to zero.

use nalgebra::DMatrix;
use strata_curves::{CurveBundle, CurveError};
use strata_math::solvers::NewtonVectorRootFinder;
use strata_math::MathError;
use tracing::{info, warn};

use crate::config::CalibrationConfig;
use crate::error::{CalibrationError, CalibrationResult};
use crate::jacobian::CalibrationJacobianFunction;
use crate::objective::CalibrationObjectiveFunction;
use crate::problem::CalibrationProblem;

/// Result of a calibration.
#[derive(Debug, Clone)]
pub struct CalibrationOutput {
    /// Known curves merged with the calibrated curves.
    pub curves: CurveBundle,
    /// Solved parameter vector.
    pub parameters: Vec<f64>,
    /// Instrument values at the solution.
    pub residuals: Vec<f64>,
    /// Jacobian at the solution.
    pub jacobian: DMatrix<f64>,
    /// Root finder iterations used.
    pub iterations: u32,
}

impl CalibrationOutput {
    /// Returns the largest absolute residual.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        self.residuals.iter().map(|r| r.abs()).fold(0.0, f64::max)
    }
}

/// Solves for every curve of a [`CalibrationProblem`] at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct MulticurveCalibrator {
    config: CalibrationConfig,
}

impl MulticurveCalibrator {
    /// Creates a calibrator with the given configuration.
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Calibrates `problem` starting from `initial_guess`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an invalid configuration, a curve
    /// `DimensionMismatch` if the guess length or the instrument count
    /// differs from the parameter count, `NotConverged` if the root finder
    /// stops short of tolerance, and any error raised while building curves
    /// or pricing.
    pub fn calibrate(
        &self,
        problem: &CalibrationProblem,
        initial_guess: &[f64],
    ) -> CalibrationResult<CalibrationOutput> {
        self.config.validate()?;

        let n = problem.number_of_parameters();
        if initial_guess.len() != n {
            return Err(CurveError::dimension_mismatch("initial guess", n, initial_guess.len()).into());
        }
        if problem.instruments().len() != n {
            return Err(CurveError::dimension_mismatch(
                "calibration instruments",
                n,
                problem.instruments().len(),
            )
            .into());
        }

        info!(
            curves = problem.builder().len(),
            parameters = n,
            known = problem.known().len(),
            "starting multi-curve calibration"
        );

        let objective = CalibrationObjectiveFunction::new(problem, &self.config);
        let jacobian = CalibrationJacobianFunction::new(problem, &self.config);
        let solver = NewtonVectorRootFinder::new(self.config.solver);

        let solution = solver
            .solve(
                |x: &[f64]| objective.evaluate(x),
                |x: &[f64]| jacobian.evaluate(x),
                initial_guess,
            )
            .map_err(|err| match err {
                CalibrationError::Math(MathError::ConvergenceFailed {
                    iterations,
                    residual,
                }) => {
                    warn!(iterations, residual, "multi-curve calibration did not converge");
                    CalibrationError::NotConverged {
                        iterations,
                        residual,
                    }
                }
                other => other,
            })?;

        let curves = problem.merged_curves(&solution.root)?;
        let residuals = objective.evaluate(&solution.root)?;
        let jacobian = jacobian.evaluate(&solution.root)?;

        info!(
            iterations = solution.iterations,
            residual = solution.residual,
            "multi-curve calibration converged"
        );

        Ok(CalibrationOutput {
            curves,
            parameters: solution.root,
            residuals,
            jacobian,
            iterations: solution.iterations,
        })
    }
}
