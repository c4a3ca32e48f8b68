//! Root-finding for vector functions.
//!
//! Curve calibration solves `f(x) = 0` where `f` maps the flat parameter
//! vector of all curves being built to the pricing errors of the calibration
//! instruments. The solver here only needs `f` and its Jacobian; both are
//! supplied by the caller as fallible closures.
//!
//! # Example
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use strata_math::solvers::{NewtonVectorRootFinder, SolverConfig};
//! use strata_math::MathError;
//!
//! // x^2 - 4 = 0, y - x = 0
//! let f = |x: &[f64]| -> Result<Vec<f64>, MathError> {
//!     Ok(vec![x[0] * x[0] - 4.0, x[1] - x[0]])
//! };
//! let j = |x: &[f64]| -> Result<DMatrix<f64>, MathError> {
//!     Ok(DMatrix::from_row_slice(2, 2, &[2.0 * x[0], 0.0, -1.0, 1.0]))
//! };
//!
//! let solver = NewtonVectorRootFinder::new(SolverConfig::default());
//! let result = solver.solve(f, j, &[1.0, 0.0]).unwrap();
//! assert!((result.root[0] - 2.0).abs() < 1e-10);
//! ```

mod newton;

pub use newton::NewtonVectorRootFinder;

use serde::{Deserialize, Serialize};

/// Default tolerance on the residual max-norm.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the vector root finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tolerance on the max-norm of the function value.
    pub tolerance: f64,
    /// Maximum number of Newton iterations.
    pub max_iterations: u32,
    /// Maximum number of step halvings per iteration.
    pub max_step_halvings: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_step_halvings: 8,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a vector root-finding run.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSolverResult {
    /// The root found.
    pub root: Vec<f64>,
    /// Number of iterations used.
    pub iterations: u32,
    /// Max-norm of the function value at the root.
    pub residual: f64,
}

/// Max-norm of a vector.
pub(crate) fn max_norm(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}
