//! Flat zero-rate curve.

use crate::error::CurveResult;
use crate::traits::Curve;

/// A curve with the same continuously compounded zero rate at every time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantCurve {
    name: String,
    rate: f64,
}

impl ConstantCurve {
    /// Creates a flat curve.
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    /// Returns the flat rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Curve for ConstantCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_parameters(&self) -> usize {
        1
    }

    fn zero_rate(&self, _t: f64) -> CurveResult<f64> {
        Ok(self.rate)
    }

    fn parameter_sensitivity(&self, _t: f64) -> CurveResult<Vec<f64>> {
        Ok(vec![1.0])
    }
}
