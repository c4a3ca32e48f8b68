//! # Strata Math
//!
//! Numerical building blocks for the Strata curve calibration engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Node interpolators that also report how the
//!   interpolated value moves with each node value
//! - **Linear Algebra**: Dense linear solves used by the root finder
//! - **Solvers**: A multidimensional Newton root finder driven by an
//!   objective function and its Jacobian

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        InterpolationMethod, Interpolator, LinearInterpolator, NaturalCubicSpline,
    };
    pub use crate::solvers::{NewtonVectorRootFinder, SolverConfig, VectorSolverResult};
}

pub use error::{MathError, MathResult};
