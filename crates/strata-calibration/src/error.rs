//! Error types for curve calibration.

use strata_curves::CurveError;
use strata_math::MathError;
use thiserror::Error;

/// A specialized Result type for calibration operations.
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Error types for calibration operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Building or reading a curve failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A numerical routine failed.
    #[error(transparent)]
    Math(#[from] MathError),

    /// An instrument could not be priced.
    #[error("Pricing failed for {instrument}: {reason}")]
    Pricing {
        /// Instrument name.
        instrument: String,
        /// Description of the failure.
        reason: String,
    },

    /// Configuration value is out of range.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig {
        /// Offending field.
        field: String,
        /// Why the value is rejected.
        reason: String,
    },

    /// The root finder stopped before reaching tolerance.
    #[error("Calibration did not converge after {iterations} iterations (residual: {residual:.2e})")]
    NotConverged {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual max-norm.
        residual: f64,
    },
}

impl CalibrationError {
    /// Creates a pricing error.
    #[must_use]
    pub fn pricing(instrument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pricing {
            instrument: instrument.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
