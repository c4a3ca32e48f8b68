//! Calibration configuration.

use serde::{Deserialize, Serialize};
use strata_math::solvers::SolverConfig;

use crate::error::{CalibrationError, CalibrationResult};

/// Configuration for a multi-curve calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Root finder settings.
    pub solver: SolverConfig,

    /// Price instruments in parallel (requires the `parallel` feature).
    pub parallel: bool,

    /// Minimum instrument count before the parallel path is taken.
    pub parallel_threshold: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            parallel: false,
            parallel_threshold: 32,
        }
    }
}

impl CalibrationConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root finder settings.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets whether instruments are priced in parallel.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel pricing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if `count` instruments should be priced in parallel.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks the configuration for out-of-range values.
    pub fn validate(&self) -> CalibrationResult<()> {
        let tolerance = self.solver.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(CalibrationError::invalid_config(
                "solver.tolerance",
                format!("must be positive and finite, got {tolerance}"),
            ));
        }
        if self.solver.max_iterations == 0 {
            return Err(CalibrationError::invalid_config(
                "solver.max_iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
