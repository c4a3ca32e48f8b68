//! Point sensitivities and their conversion to curve-parameter sensitivities.
//!
//! A pricer reports how an instrument's value moves with the zero rate of a
//! curve at individual times: a list of `(time, ∂value/∂r(time))` pairs per
//! curve. [`point_to_parameter_sensitivity`] pushes those through a curve's
//! own parameter sensitivity to give `∂value/∂p` in the curve's parameter
//! layout.

use std::collections::BTreeMap;

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// Sensitivities to zero rates at individual times, grouped by curve name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSensitivity {
    points: BTreeMap<String, Vec<(f64, f64)>>,
}

impl PointSensitivity {
    /// Creates an empty sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sensitivity holding a single point.
    pub fn of(curve: impl Into<String>, time: f64, value: f64) -> Self {
        let mut sensitivity = Self::new();
        sensitivity.add(curve, time, value);
        sensitivity
    }

    /// Appends a point for the given curve.
    pub fn add(&mut self, curve: impl Into<String>, time: f64, value: f64) {
        self.points.entry(curve.into()).or_default().push((time, value));
    }

    /// Returns the points for a curve, if any.
    #[must_use]
    pub fn get(&self, curve: &str) -> Option<&[(f64, f64)]> {
        self.points.get(curve).map(Vec::as_slice)
    }

    /// Returns the names of the curves with points.
    #[must_use]
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    /// Returns true if no points are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.values().all(Vec::is_empty)
    }

    /// Merges another sensitivity into this one.
    #[must_use]
    pub fn plus(mut self, other: PointSensitivity) -> Self {
        for (curve, points) in other.points {
            self.points.entry(curve).or_default().extend(points);
        }
        self
    }

    /// Scales every point value by `factor`.
    #[must_use]
    pub fn multiplied_by(mut self, factor: f64) -> Self {
        for points in self.points.values_mut() {
            for (_, value) in points.iter_mut() {
                *value *= factor;
            }
        }
        self
    }
}

/// Converts one curve's point sensitivities into a sensitivity to each of
/// the curve's parameters.
///
/// The result has `curve.number_of_parameters()` entries, laid out the way
/// the curve lays out its parameters (underlying blocks first for spread
/// curves).
pub fn point_to_parameter_sensitivity(
    points: &[(f64, f64)],
    curve: &dyn Curve,
) -> CurveResult<Vec<f64>> {
    let n = curve.number_of_parameters();
    let mut result = vec![0.0; n];
    for &(time, value) in points {
        let sensitivity = curve.parameter_sensitivity(time)?;
        if sensitivity.len() != n {
            return Err(CurveError::dimension_mismatch(
                format!("parameter sensitivity of '{}'", curve.name()),
                n,
                sensitivity.len(),
            ));
        }
        for (r, s) in result.iter_mut().zip(sensitivity) {
            *r += value * s;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ConstantCurve, InterpolatedCurve};
    use approx::assert_relative_eq;
    use strata_math::interpolation::InterpolationMethod;

    #[test]
    fn test_point_sensitivity_accumulates() {
        let mut sensitivity = PointSensitivity::of("USD-OIS", 1.0, 2.0);
        sensitivity.add("USD-OIS", 2.0, 3.0);
        sensitivity.add("USD-LIBOR-3M", 0.5, -1.0);

        assert_eq!(sensitivity.get("USD-OIS").unwrap(), &[(1.0, 2.0), (2.0, 3.0)]);
        assert_eq!(
            sensitivity.curve_names().collect::<Vec<_>>(),
            vec!["USD-LIBOR-3M", "USD-OIS"]
        );
        assert!(sensitivity.get("EUR-OIS").is_none());
    }

    #[test]
    fn test_plus_and_scale() {
        let merged = PointSensitivity::of("a", 1.0, 2.0)
            .plus(PointSensitivity::of("a", 3.0, 4.0))
            .plus(PointSensitivity::of("b", 1.0, 1.0))
            .multiplied_by(-0.5);

        assert_eq!(merged.get("a").unwrap(), &[(1.0, -1.0), (3.0, -2.0)]);
        assert_eq!(merged.get("b").unwrap(), &[(1.0, -0.5)]);
        assert!(!merged.is_empty());
        assert!(PointSensitivity::new().is_empty());
    }

    #[test]
    fn test_point_to_parameter_on_interpolated_curve() {
        let curve = InterpolatedCurve::new(
            "c",
            vec![1.0, 2.0, 4.0],
            vec![0.01, 0.02, 0.03],
            InterpolationMethod::Linear,
        )
        .unwrap();
        let points = [(1.5, 10.0), (4.0, 1.0)];

        let result = point_to_parameter_sensitivity(&points, &curve).unwrap();

        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(result[1], 5.0, epsilon = 1e-12);
        assert_relative_eq!(result[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_points_gives_zero_block() {
        let curve = ConstantCurve::new("c", 0.01);
        assert_eq!(point_to_parameter_sensitivity(&[], &curve).unwrap(), vec![0.0]);
    }
}
