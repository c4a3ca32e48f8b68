//! Curves built as the sum or difference of other curves.

use crate::error::{CurveError, CurveResult};
use crate::traits::{Curve, SharedCurve};

/// A curve whose zero rate is `c₀ ± (c₁ + c₂ + …)`.
///
/// Spread curves are used for:
/// - Tenor basis (a forward curve as a spread over the OIS curve)
/// - Curves assembled from several parametric pieces
///
/// The parameter layout is the concatenation of the components' layouts.
/// By default every component is reported as an underlying curve. Curves
/// assembled by generators report only the bundle curves whose parameter
/// blocks lead the layout; their internal components stay anonymous.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strata_curves::curves::{AdditiveSpreadCurve, ConstantCurve};
/// use strata_curves::{Curve, SharedCurve};
///
/// let base: SharedCurve = Arc::new(ConstantCurve::new("base", 0.05));
/// let spread: SharedCurve = Arc::new(ConstantCurve::new("basis", 0.02));
/// let curve = AdditiveSpreadCurve::new("net", vec![base, spread], true).unwrap();
/// assert!((curve.zero_rate(3.0).unwrap() - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveSpreadCurve {
    name: String,
    components: Vec<SharedCurve>,
    subtract: bool,
    underlying: Vec<String>,
}

impl AdditiveSpreadCurve {
    /// Creates a spread curve.
    ///
    /// When `subtract` is true every component after the first is
    /// subtracted from the first, otherwise all components are added.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `components` is empty.
    pub fn new(
        name: impl Into<String>,
        components: Vec<SharedCurve>,
        subtract: bool,
    ) -> CurveResult<Self> {
        if components.is_empty() {
            return Err(CurveError::invalid_value(
                "spread curve needs at least one component",
            ));
        }
        let underlying = components.iter().map(|c| c.name().to_string()).collect();
        Ok(Self {
            name: name.into(),
            components,
            subtract,
            underlying,
        })
    }

    /// Replaces the reported underlying curve names.
    ///
    /// The named curves' parameter blocks must be the leading blocks of this
    /// curve's parameter layout, in the given order.
    pub(crate) fn with_underlying(mut self, names: Vec<String>) -> Self {
        self.underlying = names;
        self
    }

    /// Returns the component curves.
    #[must_use]
    pub fn components(&self) -> &[SharedCurve] {
        &self.components
    }

    /// Returns whether trailing components are subtracted.
    #[must_use]
    pub fn is_subtract(&self) -> bool {
        self.subtract
    }

    fn sign(&self, index: usize) -> f64 {
        if index > 0 && self.subtract {
            -1.0
        } else {
            1.0
        }
    }
}

impl Curve for AdditiveSpreadCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_parameters(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.number_of_parameters())
            .sum()
    }

    fn underlying_curve_names(&self) -> Vec<String> {
        self.underlying.clone()
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        let mut rate = 0.0;
        for (i, component) in self.components.iter().enumerate() {
            rate += self.sign(i) * component.zero_rate(t)?;
        }
        Ok(rate)
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>> {
        let mut sensitivity = Vec::with_capacity(self.number_of_parameters());
        for (i, component) in self.components.iter().enumerate() {
            let sign = self.sign(i);
            let block = component.parameter_sensitivity(t)?;
            if block.len() != component.number_of_parameters() {
                return Err(CurveError::dimension_mismatch(
                    format!("parameter sensitivity of '{}'", component.name()),
                    component.number_of_parameters(),
                    block.len(),
                ));
            }
            sensitivity.extend(block.into_iter().map(|s| sign * s));
        }
        Ok(sensitivity)
    }
}
