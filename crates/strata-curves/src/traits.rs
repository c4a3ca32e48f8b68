//! Core trait for parameterised yield curves.
//!
//! A calibrated curve is more than a rate function: the calibration engine
//! also needs to know how many parameters produced it, which other curves it
//! was built on, and how its zero rate moves with each parameter.

use std::sync::Arc;

use crate::error::{CurveError, CurveResult};

/// Shared handle to an immutable curve.
pub type SharedCurve = Arc<dyn Curve>;

/// The core trait for parameterised yield curves.
///
/// Rates are continuously compounded zero rates; times are in years.
///
/// # Parameter layout
///
/// [`parameter_sensitivity`](Curve::parameter_sensitivity) returns one entry
/// per parameter reported by [`number_of_parameters`](Curve::number_of_parameters).
/// A curve built on top of other curves lays out its parameters as the
/// concatenation of each component's parameters, in the order given by
/// [`underlying_curve_names`](Curve::underlying_curve_names). This is the
/// "dirty" layout that the calibration engine later redistributes.
pub trait Curve: Send + Sync + std::fmt::Debug {
    /// Returns the curve name.
    fn name(&self) -> &str;

    /// Returns the number of parameters this curve depends on, including
    /// those of any curve it was built on.
    fn number_of_parameters(&self) -> usize;

    /// Returns the names of the curves this curve was built from, in
    /// parameter-layout order. Empty for standalone curves.
    fn underlying_curve_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Returns the continuously compounded zero rate at time `t`.
    fn zero_rate(&self, t: f64) -> CurveResult<f64>;

    /// Returns the discount factor at time `t`.
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        Ok((-self.zero_rate(t)? * t).exp())
    }

    /// Returns the continuously compounded forward rate between `t1` and `t2`.
    fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Err(CurveError::invalid_value(format!(
                "t2 ({t2}) must be greater than t1 ({t1})"
            )));
        }
        let r1 = self.zero_rate(t1)?;
        let r2 = self.zero_rate(t2)?;
        Ok((r2 * t2 - r1 * t1) / (t2 - t1))
    }

    /// Returns the sensitivity of `zero_rate(t)` to each parameter, in the
    /// curve's parameter layout.
    fn parameter_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>>;
}
