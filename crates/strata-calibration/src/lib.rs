//! # Strata Calibration
//!
//! Simultaneous calibration of several interdependent yield curves.
//!
//! This crate provides:
//!
//! - **Instruments**: [`CalibrationInstrument`], the pricing capability a
//!   calibration constraint implements, with zero-rate, deposit and FRA
//!   quotes as reference implementations
//! - **Objective and Jacobian**: pure functions of the parameter vector,
//!   rebuilding every curve from scratch on each call
//! - **Parameter sensitivities**: [`ParameterUnderlyingSensitivityCalculator`],
//!   which attributes risk carried by spread curves back to the curves they
//!   were built on
//! - **Calibrator**: [`MulticurveCalibrator`], a Newton solve over the above
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use strata_calibration::prelude::*;
//! use strata_curves::prelude::*;
//!
//! let builder = CurveSetBuilder::new()
//!     .with_generator(
//!         "USD-OIS",
//!         Arc::new(InterpolatedGenerator::new(vec![1.0, 5.0], InterpolationMethod::Linear)),
//!     )
//!     .with_generator(
//!         "USD-LIBOR-3M",
//!         Arc::new(ExistingSpreadGenerator::new(
//!             Arc::new(ConstantGenerator::new()),
//!             false,
//!             "USD-OIS",
//!         )),
//!     );
//!
//! let instruments: Vec<Arc<dyn CalibrationInstrument>> = vec![
//!     Arc::new(DepositQuote::new("OIS-1Y", "USD-OIS", 1.0, 0.020)),
//!     Arc::new(DepositQuote::new("OIS-5Y", "USD-OIS", 5.0, 0.028)),
//!     Arc::new(ForwardRateQuote::new("FRA-3x6", "USD-LIBOR-3M", 0.25, 0.5, 0.024)),
//! ];
//!
//! let problem = CalibrationProblem::new(builder, instruments);
//! let output = MulticurveCalibrator::default()
//!     .calibrate(&problem, &[0.02, 0.02, 0.0])
//!     .unwrap();
//!
//! assert!(output.max_residual() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod calibrator;
pub mod config;
pub mod error;
pub mod instruments;
pub mod jacobian;
pub mod layout;
pub mod objective;
mod parallel;
pub mod parameter_sensitivity;
pub mod problem;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calibrator::{CalibrationOutput, MulticurveCalibrator};
    pub use crate::config::CalibrationConfig;
    pub use crate::error::{CalibrationError, CalibrationResult};
    pub use crate::instruments::{
        CalibrationInstrument, DepositQuote, ForwardRateQuote, ZeroRateQuote,
    };
    pub use crate::jacobian::CalibrationJacobianFunction;
    pub use crate::layout::ParameterBlockLayout;
    pub use crate::objective::CalibrationObjectiveFunction;
    pub use crate::parameter_sensitivity::ParameterUnderlyingSensitivityCalculator;
    pub use crate::problem::CalibrationProblem;
}

pub use calibrator::{CalibrationOutput, MulticurveCalibrator};
pub use config::CalibrationConfig;
pub use error::{CalibrationError, CalibrationResult};
pub use instruments::CalibrationInstrument;
pub use jacobian::CalibrationJacobianFunction;
pub use objective::CalibrationObjectiveFunction;
pub use parameter_sensitivity::ParameterUnderlyingSensitivityCalculator;
pub use problem::CalibrationProblem;
