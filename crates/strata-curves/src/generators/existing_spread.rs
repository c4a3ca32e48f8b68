use std::sync::Arc;

use super::{check_parameters, CurveGenerator};
use crate::bundle::CurveBundle;
use crate::curves::AdditiveSpreadCurve;
use crate::error::{CurveError, CurveResult};
use crate::traits::SharedCurve;

/// Generates a spread on top of a curve that already exists in the bundle.
///
/// Only the inner spread generator's parameters are consumed; the existing
/// curve is looked up by name at generation time. The resulting curve lists
/// the existing curve as its only underlying curve, so its parameter layout
/// starts with the existing curve's parameters. The inner spread curve is
/// internal and never reported as underlying, even if a bundle curve shares
/// its name.
///
/// This generator cannot build a curve without a bundle.
#[derive(Debug, Clone)]
pub struct ExistingSpreadGenerator {
    inner: Arc<dyn CurveGenerator>,
    subtract: bool,
    existing_curve_name: String,
}

impl ExistingSpreadGenerator {
    /// Creates a generator adding (or subtracting) the `inner` curve to the
    /// curve named `existing_curve_name`.
    pub fn new(
        inner: Arc<dyn CurveGenerator>,
        subtract: bool,
        existing_curve_name: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            subtract,
            existing_curve_name: existing_curve_name.into(),
        }
    }

    /// Returns the name of the curve the spread is applied to.
    #[must_use]
    pub fn existing_curve_name(&self) -> &str {
        &self.existing_curve_name
    }
}

impl CurveGenerator for ExistingSpreadGenerator {
    fn number_of_parameters(&self) -> usize {
        self.inner.number_of_parameters()
    }

    fn generate(&self, name: &str, _parameters: &[f64]) -> CurveResult<SharedCurve> {
        Err(CurveError::unsupported(format!(
            "curve '{name}' is a spread over '{}' and needs a curve bundle",
            self.existing_curve_name
        )))
    }

    fn generate_with_bundle(
        &self,
        name: &str,
        bundle: &CurveBundle,
        parameters: &[f64],
    ) -> CurveResult<SharedCurve> {
        check_parameters(name, self.number_of_parameters(), parameters)?;
        let existing = Arc::clone(bundle.get_curve(&self.existing_curve_name)?);
        let spread = self
            .inner
            .generate_with_bundle(&format!("{name}-spread"), bundle, parameters)?;
        let curve = AdditiveSpreadCurve::new(name, vec![existing, spread], self.subtract)?
            .with_underlying(vec![self.existing_curve_name.clone()]);
        Ok(Arc::new(curve))
    }

    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        self.inner.initial_guess(rates)
    }
}
