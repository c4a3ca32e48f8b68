//! Nelson-Siegel parametric curve.

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// Nelson-Siegel zero-rate curve.
///
/// ```text
/// z(t) = β₀ + β₁ * L(t/τ) + β₂ * (L(t/τ) - e^(-t/τ)),   L(x) = (1 - e^(-x)) / x
/// ```
///
/// Parameters are ordered (β₀, β₁, β₂, τ).
#[derive(Debug, Clone, PartialEq)]
pub struct NelsonSiegelCurve {
    name: String,
    beta0: f64,
    beta1: f64,
    beta2: f64,
    tau: f64,
}

impl NelsonSiegelCurve {
    /// Creates a Nelson-Siegel curve from (β₀, β₁, β₂, τ).
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if τ is not strictly positive.
    pub fn new(name: impl Into<String>, parameters: [f64; 4]) -> CurveResult<Self> {
        let [beta0, beta1, beta2, tau] = parameters;
        if !tau.is_finite() || tau <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "Nelson-Siegel tau must be positive, got {tau}"
            )));
        }
        Ok(Self {
            name: name.into(),
            beta0,
            beta1,
            beta2,
            tau,
        })
    }

    /// Returns the parameters as (β₀, β₁, β₂, τ).
    #[must_use]
    pub fn parameters(&self) -> [f64; 4] {
        [self.beta0, self.beta1, self.beta2, self.tau]
    }

    /// (1 - e^(-x)) / x and its derivative in x.
    fn loading(x: f64) -> (f64, f64) {
        if x.abs() < 1e-8 {
            (1.0 - x / 2.0 + x * x / 6.0, -0.5 + x / 3.0)
        } else {
            let l = (1.0 - (-x).exp()) / x;
            (l, ((-x).exp() - l) / x)
        }
    }
}

impl Curve for NelsonSiegelCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_parameters(&self) -> usize {
        4
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        let x = t / self.tau;
        let (l, _) = Self::loading(x);
        Ok(self.beta0 + self.beta1 * l + self.beta2 * (l - (-x).exp()))
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>> {
        let x = t / self.tau;
        let decay = (-x).exp();
        let (l, dl) = Self::loading(x);
        let dz_dx = self.beta1 * dl + self.beta2 * (dl + decay);
        let dx_dtau = -t / (self.tau * self.tau);
        Ok(vec![1.0, l, l - decay, dz_dx * dx_dtau])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_short_and_long_end() {
        let curve = NelsonSiegelCurve::new("ns", [0.045, -0.02, 0.01, 2.0]).unwrap();

        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.025, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(500.0).unwrap(), 0.045, epsilon = 1e-4);
    }

    #[test]
    fn test_parameter_sensitivity_matches_bump() {
        let params = [0.04, -0.015, 0.02, 1.7];
        let curve = NelsonSiegelCurve::new("ns", params).unwrap();
        let bump = 1e-7;

        for t in [0.25, 1.0, 4.0, 12.0] {
            let analytic = curve.parameter_sensitivity(t).unwrap();
            for k in 0..4 {
                let mut up = params;
                let mut down = params;
                up[k] += bump;
                down[k] -= bump;
                let numeric = (NelsonSiegelCurve::new("ns", up).unwrap().zero_rate(t).unwrap()
                    - NelsonSiegelCurve::new("ns", down).unwrap().zero_rate(t).unwrap())
                    / (2.0 * bump);
                assert_relative_eq!(analytic[k], numeric, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn test_invalid_tau() {
        assert!(NelsonSiegelCurve::new("ns", [0.04, 0.0, 0.0, 0.0]).is_err());
        assert!(NelsonSiegelCurve::new("ns", [0.04, 0.0, 0.0, f64::NAN]).is_err());
    }
}
