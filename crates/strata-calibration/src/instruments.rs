//! Instruments used as calibration constraints.
//!
//! An instrument is priced against a [`CurveBundle`] and reports both its
//! value and how that value moves with zero rates at individual times
//! (a [`PointSensitivity`]). Calibration drives every instrument's value to
//! zero, so the reference quotes here return model minus market.
//!
//! | Instrument | Value |
//! |------------|-------|
//! | [`ZeroRateQuote`] | r(T) - quote |
//! | [`DepositQuote`] | (1/DF(T) - 1)/T - quote |
//! | [`ForwardRateQuote`] | (DF(T₁)/DF(T₂) - 1)/(T₂ - T₁) - quote |

use std::fmt;

use strata_curves::{CurveBundle, PointSensitivity};

use crate::error::{CalibrationError, CalibrationResult};

/// A priceable contract used as a constraint when solving for curves.
pub trait CalibrationInstrument: Send + Sync + fmt::Debug {
    /// Returns the instrument name, used in error messages.
    fn name(&self) -> &str;

    /// Returns the instrument value against `curves`.
    fn price(&self, curves: &CurveBundle) -> CalibrationResult<f64>;

    /// Returns the sensitivity of [`price`](Self::price) to the zero rates
    /// of the curves it reads.
    fn curve_sensitivity(&self, curves: &CurveBundle) -> CalibrationResult<PointSensitivity>;
}

/// A quoted continuously compounded zero rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroRateQuote {
    name: String,
    curve: String,
    time: f64,
    rate: f64,
}

impl ZeroRateQuote {
    /// Creates a zero rate quote on `curve` at `time`.
    #[must_use]
    pub fn new(name: impl Into<String>, curve: impl Into<String>, time: f64, rate: f64) -> Self {
        Self {
            name: name.into(),
            curve: curve.into(),
            time,
            rate,
        }
    }
}

impl CalibrationInstrument for ZeroRateQuote {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self, curves: &CurveBundle) -> CalibrationResult<f64> {
        let curve = curves.get_curve(&self.curve)?;
        Ok(curve.zero_rate(self.time)? - self.rate)
    }

    fn curve_sensitivity(&self, curves: &CurveBundle) -> CalibrationResult<PointSensitivity> {
        curves.get_curve(&self.curve)?;
        Ok(PointSensitivity::of(self.curve.as_str(), self.time, 1.0))
    }
}

/// A money-market deposit quoted as a simple rate to `maturity`.
///
/// Discounting and projection both use the named curve:
/// implied rate = (1/DF(T) - 1) / T.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositQuote {
    name: String,
    curve: String,
    maturity: f64,
    rate: f64,
}

impl DepositQuote {
    /// Creates a deposit quote.
    #[must_use]
    pub fn new(name: impl Into<String>, curve: impl Into<String>, maturity: f64, rate: f64) -> Self {
        Self {
            name: name.into(),
            curve: curve.into(),
            maturity,
            rate,
        }
    }

    fn check_maturity(&self) -> CalibrationResult<()> {
        if self.maturity > 0.0 && self.maturity.is_finite() {
            Ok(())
        } else {
            Err(CalibrationError::pricing(
                self.name.as_str(),
                format!("maturity must be positive, got {}", self.maturity),
            ))
        }
    }
}

impl CalibrationInstrument for DepositQuote {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self, curves: &CurveBundle) -> CalibrationResult<f64> {
        self.check_maturity()?;
        let df = curves.get_curve(&self.curve)?.discount_factor(self.maturity)?;
        Ok((1.0 / df - 1.0) / self.maturity - self.rate)
    }

    fn curve_sensitivity(&self, curves: &CurveBundle) -> CalibrationResult<PointSensitivity> {
        self.check_maturity()?;
        // d/dr [(e^{rT} - 1)/T] = e^{rT} = 1/DF(T)
        let df = curves.get_curve(&self.curve)?.discount_factor(self.maturity)?;
        Ok(PointSensitivity::of(self.curve.as_str(), self.maturity, 1.0 / df))
    }
}

/// A forward rate agreement quoted as a simple rate between `start` and
/// `end`, projected from the named curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardRateQuote {
    name: String,
    curve: String,
    start: f64,
    end: f64,
    rate: f64,
}

impl ForwardRateQuote {
    /// Creates a forward rate quote.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        curve: impl Into<String>,
        start: f64,
        end: f64,
        rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            curve: curve.into(),
            start,
            end,
            rate,
        }
    }

    fn accrual(&self) -> CalibrationResult<f64> {
        if self.start >= 0.0 && self.end > self.start && self.end.is_finite() {
            Ok(self.end - self.start)
        } else {
            Err(CalibrationError::pricing(
                self.name.as_str(),
                format!("invalid forward period [{}, {}]", self.start, self.end),
            ))
        }
    }

    /// DF(start) / DF(end).
    fn growth(&self, curves: &CurveBundle) -> CalibrationResult<f64> {
        let curve = curves.get_curve(&self.curve)?;
        Ok(curve.discount_factor(self.start)? / curve.discount_factor(self.end)?)
    }
}

impl CalibrationInstrument for ForwardRateQuote {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self, curves: &CurveBundle) -> CalibrationResult<f64> {
        let tau = self.accrual()?;
        Ok((self.growth(curves)? - 1.0) / tau - self.rate)
    }

    fn curve_sensitivity(&self, curves: &CurveBundle) -> CalibrationResult<PointSensitivity> {
        let tau = self.accrual()?;
        let growth = self.growth(curves)?;
        let mut sensitivity = PointSensitivity::new();
        sensitivity.add(self.curve.as_str(), self.start, -self.start * growth / tau);
        sensitivity.add(self.curve.as_str(), self.end, self.end * growth / tau);
        Ok(sensitivity)
    }
}
