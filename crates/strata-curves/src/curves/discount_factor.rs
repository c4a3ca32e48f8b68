//! Curve interpolated on discount factors.

use strata_math::interpolation::{InterpolationMethod, Interpolator};

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// Times below this are evaluated at `SMALL_TIME` when converting a
/// discount factor to a zero rate.
pub const SMALL_TIME: f64 = 1e-6;

/// A curve defined by discount factors at nodes, one parameter per node.
///
/// The interpolator also holds a node at `t = 0` with a discount factor of
/// one, which is not a parameter. Zero rates are `-ln(DF(t)) / t`, and
/// parameter sensitivities are those of the zero rate to each node's
/// discount factor.
#[derive(Debug)]
pub struct DiscountFactorCurve {
    name: String,
    discount_factors: Vec<f64>,
    interpolator: Box<dyn Interpolator>,
}

impl DiscountFactorCurve {
    /// Creates a discount factor curve.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ, `InvalidValue` for
    /// a node at or before time zero or a non-positive discount factor, or
    /// the interpolator's error if the nodes are unusable.
    pub fn new(
        name: impl Into<String>,
        nodes: Vec<f64>,
        discount_factors: Vec<f64>,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        let name = name.into();
        if nodes.len() != discount_factors.len() {
            return Err(CurveError::dimension_mismatch(
                format!("discount factor curve '{name}'"),
                nodes.len(),
                discount_factors.len(),
            ));
        }
        if nodes.iter().any(|&t| t <= 0.0) {
            return Err(CurveError::invalid_value(format!(
                "discount factor curve '{name}' needs nodes after time zero"
            )));
        }
        if discount_factors.iter().any(|&df| df <= 0.0) {
            return Err(CurveError::invalid_value(format!(
                "discount factor curve '{name}' has a non-positive discount factor"
            )));
        }

        let mut all_nodes = Vec::with_capacity(nodes.len() + 1);
        all_nodes.push(0.0);
        all_nodes.extend(nodes);
        let mut all_values = Vec::with_capacity(discount_factors.len() + 1);
        all_values.push(1.0);
        all_values.extend(&discount_factors);

        let interpolator = method.build(all_nodes, all_values)?;
        Ok(Self {
            name,
            discount_factors,
            interpolator,
        })
    }

    /// Returns the node discount factors.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    fn interpolated_df(&self, t: f64) -> CurveResult<f64> {
        let df = self.interpolator.interpolate(t)?;
        if df <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "curve '{}' interpolates a non-positive discount factor at t = {t}",
                self.name
            )));
        }
        Ok(df)
    }
}

impl Curve for DiscountFactorCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_parameters(&self) -> usize {
        self.discount_factors.len()
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        let t = t.max(SMALL_TIME);
        Ok(-self.interpolated_df(t)?.ln() / t)
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>> {
        let t = t.max(SMALL_TIME);
        let df = self.interpolated_df(t)?;
        let weights = self.interpolator.node_sensitivity(t)?;
        Ok(weights[1..].iter().map(|w| -w / (t * df)).collect())
    }
}
