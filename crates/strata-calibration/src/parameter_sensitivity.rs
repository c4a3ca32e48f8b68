//! Instrument sensitivities to the calibration parameters.

use std::collections::HashSet;

use strata_curves::sensitivity::point_to_parameter_sensitivity;
use strata_curves::{CurveBundle, CurveError, CurveResult, PointSensitivity};
use tracing::trace;

use crate::error::CalibrationResult;
use crate::instruments::CalibrationInstrument;
use crate::layout::ParameterBlockLayout;

/// Computes an instrument's sensitivity to each solved parameter.
///
/// The instrument's point sensitivity is converted curve by curve into the
/// dirty layout, then folded into the clean layout so that risk carried by
/// a spread curve on its underlying curve lands in the underlying curve's
/// columns. Fixed curves contribute no columns.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use std::sync::Arc;
/// use strata_calibration::instruments::ZeroRateQuote;
/// use strata_calibration::ParameterUnderlyingSensitivityCalculator;
/// use strata_curves::prelude::*;
///
/// let curves = CurveSetBuilder::new()
///     .with_generator("OIS", Arc::new(ConstantGenerator::new()))
///     .with_generator(
///         "LIBOR",
///         Arc::new(ExistingSpreadGenerator::new(Arc::new(ConstantGenerator::new()), false, "OIS")),
///     )
///     .evaluate(&[0.02, 0.001])
///     .unwrap();
///
/// let quote = ZeroRateQuote::new("Z-LIBOR-2Y", "LIBOR", 2.0, 0.021);
/// let row = ParameterUnderlyingSensitivityCalculator::new()
///     .calculate_sensitivity(&quote, &HashSet::new(), &curves)
///     .unwrap();
/// assert_eq!(row, vec![1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterUnderlyingSensitivityCalculator;

impl ParameterUnderlyingSensitivityCalculator {
    /// Creates a calculator.
    pub fn new() -> Self {
        Self
    }

    /// Returns the clean parameter sensitivity of `instrument` against
    /// `curves`, excluding the curves named in `fixed`.
    pub fn calculate_sensitivity(
        &self,
        instrument: &dyn CalibrationInstrument,
        fixed: &HashSet<String>,
        curves: &CurveBundle,
    ) -> CalibrationResult<Vec<f64>> {
        let layout = ParameterBlockLayout::new(curves, fixed)?;
        self.calculate_with_layout(instrument, &layout, curves)
    }

    /// Same as [`calculate_sensitivity`](Self::calculate_sensitivity) with a
    /// precomputed layout, for pricing many instruments on one bundle.
    pub fn calculate_with_layout(
        &self,
        instrument: &dyn CalibrationInstrument,
        layout: &ParameterBlockLayout,
        curves: &CurveBundle,
    ) -> CalibrationResult<Vec<f64>> {
        let points = instrument.curve_sensitivity(curves)?;
        trace!(instrument = instrument.name(), "parameter sensitivity");
        Ok(self.point_to_clean(&points, layout, curves)?)
    }

    /// Converts a point sensitivity into the clean layout.
    pub fn point_to_clean(
        &self,
        points: &PointSensitivity,
        layout: &ParameterBlockLayout,
        curves: &CurveBundle,
    ) -> CurveResult<Vec<f64>> {
        let dirty = self.point_to_dirty(points, layout, curves)?;
        layout.redistribute(&dirty)
    }

    /// Converts a point sensitivity into the dirty layout: every solved
    /// curve's full parameter sensitivity, concatenated in bundle order.
    ///
    /// A curve with no points contributes a block of zeros.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if a curve's parameter count differs from
    /// the one recorded in `layout`, as happens when the layout was computed
    /// from another bundle.
    pub fn point_to_dirty(
        &self,
        points: &PointSensitivity,
        layout: &ParameterBlockLayout,
        curves: &CurveBundle,
    ) -> CurveResult<Vec<f64>> {
        let mut dirty = vec![0.0; layout.dirty_len()];
        for block in layout.blocks() {
            let Some(curve_points) = points.get(block.name()) else {
                continue;
            };
            let curve = curves.get_curve(block.name())?;
            let sensitivity = point_to_parameter_sensitivity(curve_points, curve.as_ref())?;
            if sensitivity.len() != block.parameter_count() {
                return Err(CurveError::dimension_mismatch(
                    format!("parameter sensitivity of '{}'", block.name()),
                    block.parameter_count(),
                    sensitivity.len(),
                ));
            }
            dirty[block.dirty_range()].copy_from_slice(&sensitivity);
        }
        Ok(dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::ZeroRateQuote;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::sync::Arc;
    use strata_curves::prelude::*;

    fn ois_and_libor() -> CurveBundle {
        CurveSetBuilder::new()
            .with_generator(
                "OIS",
                Arc::new(InterpolatedGenerator::new(vec![1.0, 2.0, 3.0], InterpolationMethod::Linear)),
            )
            .with_generator(
                "LIBOR",
                Arc::new(ExistingSpreadGenerator::new(
                    Arc::new(InterpolatedGenerator::new(vec![1.0, 3.0], InterpolationMethod::Linear)),
                    false,
                    "OIS",
                )),
            )
            .evaluate(&[0.01, 0.015, 0.02, 0.001, 0.002])
            .unwrap()
    }

    #[test]
    fn test_no_underlying_clean_equals_dirty() {
        let curves = CurveSetBuilder::new()
            .with_generator(
                "A",
                Arc::new(InterpolatedGenerator::new(vec![1.0, 2.0], InterpolationMethod::Linear)),
            )
            .with_generator("B", Arc::new(ConstantGenerator::new()))
            .evaluate(&[0.01, 0.02, 0.005])
            .unwrap();
        let layout = ParameterBlockLayout::new(&curves, &HashSet::new()).unwrap();

        let points = PointSensitivity::of("A", 1.5, 2.0).plus(PointSensitivity::of("B", 4.0, 3.0));
        let calculator = ParameterUnderlyingSensitivityCalculator::new();
        let dirty = calculator.point_to_dirty(&points, &layout, &curves).unwrap();
        let clean = calculator.point_to_clean(&points, &layout, &curves).unwrap();

        assert_eq!(dirty, clean);
        assert_eq!(clean, vec![1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_spread_risk_lands_on_underlying() {
        let curves = ois_and_libor();
        let quote = ZeroRateQuote::new("Z-LIBOR", "LIBOR", 2.0, 0.0);

        let row = ParameterUnderlyingSensitivityCalculator::new()
            .calculate_sensitivity(&quote, &HashSet::new(), &curves)
            .unwrap();

        assert_eq!(row.len(), 5);
        assert_relative_eq!(row[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(row[3], 0.5, epsilon = 1e-12);
        assert_relative_eq!(row[4], 0.5, epsilon = 1e-12);
        assert_relative_eq!(row[0] + row[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_curve_removed() {
        let curves = ois_and_libor();
        let fixed: HashSet<String> = ["OIS".to_string()].into_iter().collect();
        let quote = ZeroRateQuote::new("Z-LIBOR", "LIBOR", 2.0, 0.0);

        let row = ParameterUnderlyingSensitivityCalculator::new()
            .calculate_sensitivity(&quote, &fixed, &curves)
            .unwrap();

        assert_eq!(row, vec![0.5, 0.5]);
    }

    #[test]
    fn test_curve_without_points_is_zero() {
        let curves = ois_and_libor();
        let quote = ZeroRateQuote::new("Z-OIS", "OIS", 3.0, 0.0);

        let row = ParameterUnderlyingSensitivityCalculator::new()
            .calculate_sensitivity(&quote, &HashSet::new(), &curves)
            .unwrap();

        assert_eq!(row, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_layout_from_other_bundle_rejected() {
        let one_parameter = CurveSetBuilder::new()
            .with_generator("A", Arc::new(ConstantGenerator::new()))
            .evaluate(&[0.01])
            .unwrap();
        let two_parameters = CurveSetBuilder::new()
            .with_generator(
                "A",
                Arc::new(InterpolatedGenerator::new(vec![1.0, 2.0], InterpolationMethod::Linear)),
            )
            .evaluate(&[0.01, 0.02])
            .unwrap();
        let layout = ParameterBlockLayout::new(&one_parameter, &HashSet::new()).unwrap();

        let err = ParameterUnderlyingSensitivityCalculator::new()
            .point_to_clean(&PointSensitivity::of("A", 1.5, 1.0), &layout, &two_parameters)
            .unwrap_err();

        assert!(matches!(
            err,
            CurveError::DimensionMismatch {
                expected: 1,
                actual: 2,
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn prop_redistribution_conserves_mass(
            ois_points in prop::collection::vec((0.0f64..5.0, -10.0f64..10.0), 0..6),
            libor_points in prop::collection::vec((0.0f64..5.0, -10.0f64..10.0), 0..6),
        ) {
            let curves = ois_and_libor();
            let layout = ParameterBlockLayout::new(&curves, &HashSet::new()).unwrap();
            let mut points = PointSensitivity::new();
            for (t, v) in ois_points {
                points.add("OIS", t, v);
            }
            for (t, v) in libor_points {
                points.add("LIBOR", t, v);
            }

            let calculator = ParameterUnderlyingSensitivityCalculator::new();
            let dirty = calculator.point_to_dirty(&points, &layout, &curves).unwrap();
            let clean = calculator.point_to_clean(&points, &layout, &curves).unwrap();

            prop_assert_eq!(clean.len(), 5);
            let dirty_total: f64 = dirty.iter().sum();
            let clean_total: f64 = clean.iter().sum();
            prop_assert!((dirty_total - clean_total).abs() < 1e-9);
        }
    }
}
