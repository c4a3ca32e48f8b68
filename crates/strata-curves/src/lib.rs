//! # Strata Curves
//!
//! Parameterised yield curves and the machinery that builds them from a flat
//! parameter vector.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`Curve`], a yield curve that knows how many parameters
//!   it was built from and how its rates move with each of them
//! - **Curve Types**: Constant, interpolated (on zero rates or discount
//!   factors), Nelson-Siegel and additive spread curves
//! - **Bundles**: [`CurveBundle`], an insertion-ordered set of named curves
//! - **Sensitivities**: [`PointSensitivity`] and its conversion to parameter
//!   sensitivities
//! - **Generators**: [`CurveGenerator`] implementations that turn a
//!   parameter slice into a curve
//! - **Builder**: [`CurveSetBuilder`], which slices one parameter vector
//!   across an ordered list of generators
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use strata_curves::prelude::*;
//!
//! let builder = CurveSetBuilder::new()
//!     .with_generator("USD-OIS", Arc::new(ConstantGenerator::new()))
//!     .with_generator(
//!         "USD-LIBOR-3M",
//!         Arc::new(ExistingSpreadGenerator::new(
//!             Arc::new(ConstantGenerator::new()),
//!             false,
//!             "USD-OIS",
//!         )),
//!     );
//!
//! let curves = builder.evaluate(&[0.02, 0.005]).unwrap();
//! let libor = curves.get_curve("USD-LIBOR-3M").unwrap();
//! assert!((libor.zero_rate(5.0).unwrap() - 0.025).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod builder;
pub mod bundle;
pub mod curves;
pub mod error;
pub mod generators;
pub mod sensitivity;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::CurveSetBuilder;
    pub use crate::bundle::CurveBundle;
    pub use crate::curves::{
        AdditiveSpreadCurve, ConstantCurve, DiscountFactorCurve, InterpolatedCurve, NelsonSiegelCurve,
    };
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::generators::{
        AdditiveSpreadGenerator, AnchoredInterpolatedGenerator, ConstantGenerator, CurveGenerator,
        DiscountFactorGenerator, ExistingSpreadGenerator, FixedSpreadGenerator, InterpolatedGenerator,
        NelsonSiegelGenerator,
    };
    pub use crate::sensitivity::{point_to_parameter_sensitivity, PointSensitivity};
    pub use crate::traits::{Curve, SharedCurve};
    pub use strata_math::interpolation::InterpolationMethod;
}

pub use builder::CurveSetBuilder;
pub use bundle::CurveBundle;
pub use error::{CurveError, CurveResult};
pub use generators::CurveGenerator;
pub use sensitivity::PointSensitivity;
pub use traits::{Curve, SharedCurve};
