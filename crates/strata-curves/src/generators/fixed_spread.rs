use std::sync::Arc;

use super::{check_parameters, CurveGenerator};
use crate::bundle::CurveBundle;
use crate::curves::AdditiveSpreadCurve;
use crate::error::CurveResult;
use crate::traits::{Curve, SharedCurve};

/// Generates a curve and adds (or subtracts) a fixed, caller-supplied curve.
///
/// The fixed curve is usually a known adjustment such as a turn-of-year
/// spread. It contributes rates but no parameters: the combined curve has
/// exactly the inner generator's parameters, and reports the inner curve's
/// underlying curves as its own.
#[derive(Debug, Clone)]
pub struct FixedSpreadGenerator {
    inner: Arc<dyn CurveGenerator>,
    subtract: bool,
    fixed: SharedCurve,
}

impl FixedSpreadGenerator {
    /// Creates a generator combining the `inner` curve with `fixed`.
    pub fn new(inner: Arc<dyn CurveGenerator>, subtract: bool, fixed: SharedCurve) -> Self {
        Self {
            inner,
            subtract,
            fixed,
        }
    }

    /// Returns the fixed curve.
    #[must_use]
    pub fn fixed_curve(&self) -> &SharedCurve {
        &self.fixed
    }

    fn combine(&self, name: &str, inner: SharedCurve) -> CurveResult<SharedCurve> {
        let underlying = inner.underlying_curve_names();
        let fixed: SharedCurve = Arc::new(Frozen(Arc::clone(&self.fixed)));
        let curve = AdditiveSpreadCurve::new(name, vec![inner, fixed], self.subtract)?
            .with_underlying(underlying);
        Ok(Arc::new(curve))
    }
}

impl CurveGenerator for FixedSpreadGenerator {
    fn number_of_parameters(&self) -> usize {
        self.inner.number_of_parameters()
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        check_parameters(name, self.number_of_parameters(), parameters)?;
        let inner = self.inner.generate(name, parameters)?;
        self.combine(name, inner)
    }

    fn generate_with_bundle(
        &self,
        name: &str,
        bundle: &CurveBundle,
        parameters: &[f64],
    ) -> CurveResult<SharedCurve> {
        check_parameters(name, self.number_of_parameters(), parameters)?;
        let inner = self.inner.generate_with_bundle(name, bundle, parameters)?;
        self.combine(name, inner)
    }

    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        self.inner.initial_guess(rates)
    }
}

/// A curve seen through a parameter-free view.
#[derive(Debug)]
struct Frozen(SharedCurve);

impl Curve for Frozen {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn number_of_parameters(&self) -> usize {
        0
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        self.0.zero_rate(t)
    }

    fn parameter_sensitivity(&self, _t: f64) -> CurveResult<Vec<f64>> {
        Ok(Vec::new())
    }
}
