//! Curve interpolated from zero rates at fixed nodes.

use strata_math::interpolation::{InterpolationMethod, Interpolator};

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A curve defined by zero rates at nodes, one parameter per node.
///
/// An anchored curve carries one extra node with a zero rate that is not a
/// parameter. It pins the curve (typically a spread) to zero at the anchor.
#[derive(Debug)]
pub struct InterpolatedCurve {
    name: String,
    rates: Vec<f64>,
    method: InterpolationMethod,
    interpolator: Box<dyn Interpolator>,
    anchor_index: Option<usize>,
}

impl InterpolatedCurve {
    /// Creates an interpolated curve.
    ///
    /// `nodes` and `rates` are positionally aligned.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ, or the
    /// interpolator's error if the nodes are unusable.
    pub fn new(
        name: impl Into<String>,
        nodes: Vec<f64>,
        rates: Vec<f64>,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        let name = name.into();
        if nodes.len() != rates.len() {
            return Err(CurveError::dimension_mismatch(
                format!("interpolated curve '{name}'"),
                nodes.len(),
                rates.len(),
            ));
        }
        let interpolator = method.build(nodes, rates.clone())?;
        Ok(Self {
            name,
            rates,
            method,
            interpolator,
            anchor_index: None,
        })
    }

    /// Returns the node times.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        self.interpolator.nodes()
    }

    /// Returns the node rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the anchor time, if the curve is anchored.
    #[must_use]
    pub fn anchor(&self) -> Option<f64> {
        self.anchor_index.map(|i| self.interpolator.nodes()[i])
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }
}

impl Curve for InterpolatedCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_parameters(&self) -> usize {
        self.rates.len()
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.interpolator.interpolate(t)?)
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>> {
        let mut sensitivity = self.interpolator.node_sensitivity(t)?;
        if let Some(i) = self.anchor_index {
            sensitivity.remove(i);
        }
        Ok(sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolated_curve() {
        let curve = InterpolatedCurve::new(
            "USD-OIS",
            vec![1.0, 2.0, 5.0],
            vec![0.01, 0.02, 0.03],
            InterpolationMethod::Linear,
        )
        .unwrap();

        assert_eq!(curve.number_of_parameters(), 3);
        assert_relative_eq!(curve.zero_rate(1.5).unwrap(), 0.015, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(0.1).unwrap(), 0.01, epsilon = 1e-12);

        let sensitivity = curve.parameter_sensitivity(3.5).unwrap();
        assert_eq!(sensitivity.len(), 3);
        assert_relative_eq!(sensitivity[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(sensitivity[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_anchored_curve() {
        let curve = InterpolatedCurve::anchored(
            "spread",
            vec![1.0, 3.0],
            vec![0.002, 0.004],
            InterpolationMethod::Linear,
            2.0,
        )
        .unwrap();

        assert_eq!(curve.number_of_parameters(), 2);
        assert_eq!(curve.nodes(), &[1.0, 2.0, 3.0]);
        assert_eq!(curve.anchor(), Some(2.0));
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(curve.zero_rate(1.5).unwrap(), 0.001, epsilon = 1e-15);

        // the anchor's weight is dropped
        let sensitivity = curve.parameter_sensitivity(2.5).unwrap();
        assert_eq!(sensitivity.len(), 2);
        assert_relative_eq!(sensitivity[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(sensitivity[1], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_anchor_on_node_rejected() {
        let result = InterpolatedCurve::anchored(
            "spread",
            vec![1.0, 3.0],
            vec![0.002, 0.004],
            InterpolationMethod::Linear,
            3.0,
        );
        assert!(matches!(result, Err(CurveError::Math(_))));
    }

    #[test]
    fn test_misaligned_nodes() {
        let result = InterpolatedCurve::new(
            "bad",
            vec![1.0, 2.0],
            vec![0.01],
            InterpolationMethod::Linear,
        );
        assert!(matches!(
            result,
            Err(CurveError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }
}
