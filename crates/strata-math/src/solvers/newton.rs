//! Damped Newton-Raphson for vector functions.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

use crate::error::MathError;
use crate::linear_algebra::solve_linear_system;
use crate::solvers::{max_norm, SolverConfig, VectorSolverResult};

/// Newton-Raphson root finder for square systems.
///
/// Each iteration solves `J(x) dx = -f(x)` and accepts the full step if it
/// reduces the residual, halving it otherwise up to
/// [`SolverConfig::max_step_halvings`] times.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonVectorRootFinder {
    config: SolverConfig,
}

impl NewtonVectorRootFinder {
    /// Creates a root finder with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds `x` such that `function(x) = 0`, starting from `x0`.
    ///
    /// Errors raised by `function` or `jacobian` are returned unchanged.
    pub fn solve<F, J, E>(
        &self,
        mut function: F,
        mut jacobian: J,
        x0: &[f64],
    ) -> Result<VectorSolverResult, E>
    where
        F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
        J: FnMut(&[f64]) -> Result<DMatrix<f64>, E>,
        E: From<MathError>,
    {
        let n = x0.len();
        let mut x = x0.to_vec();
        let mut fx = function(&x)?;
        if fx.len() != n {
            return Err(MathError::dimension_mismatch(n, fx.len()).into());
        }
        let mut residual = max_norm(&fx);

        for iteration in 0..self.config.max_iterations {
            debug!(iteration, residual, "newton iteration");
            if residual < self.config.tolerance {
                return Ok(VectorSolverResult {
                    root: x,
                    iterations: iteration,
                    residual,
                });
            }

            let jac = jacobian(&x)?;
            if jac.nrows() != n || jac.ncols() != n {
                return Err(MathError::dimension_mismatch(n, jac.ncols()).into());
            }
            let rhs = -DVector::from_column_slice(&fx);
            let step = solve_linear_system(&jac, &rhs)?;

            let mut scale = 1.0;
            let mut halvings = 0;
            loop {
                let candidate: Vec<f64> =
                    x.iter().zip(step.iter()).map(|(xi, di)| xi + scale * di).collect();
                let f_candidate = function(&candidate)?;
                let candidate_residual = max_norm(&f_candidate);
                if candidate_residual < residual || halvings >= self.config.max_step_halvings {
                    x = candidate;
                    fx = f_candidate;
                    residual = candidate_residual;
                    break;
                }
                trace!(scale, candidate_residual, "halving newton step");
                scale *= 0.5;
                halvings += 1;
            }
        }

        if residual < self.config.tolerance {
            return Ok(VectorSolverResult {
                root: x,
                iterations: self.config.max_iterations,
                residual,
            });
        }

        Err(MathError::convergence_failed(self.config.max_iterations, residual).into())
    }
}
