//! Curve generators.
//!
//! A generator turns a slice of the global parameter vector into a curve.
//! Generators are stateless and shared behind `Arc`, so the same generator
//! can be evaluated repeatedly by a root finder.
//!
//! | Generator | Parameters |
//! |-----------|------------|
//! | [`ConstantGenerator`] | 1 (flat rate) |
//! | [`InterpolatedGenerator`] | one rate per node |
//! | [`AnchoredInterpolatedGenerator`] | one rate per node, anchor excluded |
//! | [`DiscountFactorGenerator`] | one discount factor per node |
//! | [`NelsonSiegelGenerator`] | 4 (β₀, β₁, β₂, τ) |
//! | [`AdditiveSpreadGenerator`] | sum over sub-generators |
//! | [`ExistingSpreadGenerator`] | inner generator's count |
//! | [`FixedSpreadGenerator`] | inner generator's count |

mod additive;
mod anchored;
mod constant;
mod discount_factor;
mod existing_spread;
mod fixed_spread;
mod interpolated;
mod nelson_siegel;

pub use additive::AdditiveSpreadGenerator;
pub use anchored::AnchoredInterpolatedGenerator;
pub use constant::ConstantGenerator;
pub use discount_factor::DiscountFactorGenerator;
pub use existing_spread::ExistingSpreadGenerator;
pub use fixed_spread::FixedSpreadGenerator;
pub use interpolated::InterpolatedGenerator;
pub use nelson_siegel::NelsonSiegelGenerator;

use crate::bundle::CurveBundle;
use crate::error::{CurveError, CurveResult};
use crate::traits::SharedCurve;

/// Factory turning a parameter slice into a curve.
///
/// Implementations that need no bundle context only implement
/// [`generate`](CurveGenerator::generate); the bundle-aware overload
/// forwards to it by default.
pub trait CurveGenerator: Send + Sync + std::fmt::Debug {
    /// Returns the number of parameters this generator consumes.
    fn number_of_parameters(&self) -> usize;

    /// Builds a curve from `parameters` alone.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `parameters.len()` differs from
    /// [`number_of_parameters`](CurveGenerator::number_of_parameters), and
    /// `UnsupportedConfiguration` if the generator needs bundle context.
    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve>;

    /// Builds a curve with access to curves built or supplied earlier.
    fn generate_with_bundle(
        &self,
        name: &str,
        _bundle: &CurveBundle,
        parameters: &[f64],
    ) -> CurveResult<SharedCurve> {
        self.generate(name, parameters)
    }

    /// Maps market rates to a starting parameter set.
    ///
    /// The default passes the rates through unchanged.
    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        rates.to_vec()
    }
}

/// Checks a parameter slice against the expected count.
pub(crate) fn check_parameters(context: &str, expected: usize, parameters: &[f64]) -> CurveResult<()> {
    if parameters.len() == expected {
        Ok(())
    } else {
        Err(CurveError::dimension_mismatch(
            format!("generator for '{context}'"),
            expected,
            parameters.len(),
        ))
    }
}
