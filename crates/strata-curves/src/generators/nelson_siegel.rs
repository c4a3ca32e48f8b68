use std::sync::Arc;

use super::{check_parameters, CurveGenerator};
use crate::curves::NelsonSiegelCurve;
use crate::error::CurveResult;
use crate::traits::SharedCurve;

/// Decay used when guessing τ from market rates.
const DEFAULT_TAU: f64 = 2.0;

/// Generates a Nelson-Siegel curve from (β₀, β₁, β₂, τ).
#[derive(Debug, Clone, Copy, Default)]
pub struct NelsonSiegelGenerator;

impl NelsonSiegelGenerator {
    /// Creates a Nelson-Siegel generator.
    pub fn new() -> Self {
        Self
    }
}

impl CurveGenerator for NelsonSiegelGenerator {
    fn number_of_parameters(&self) -> usize {
        4
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        check_parameters(name, 4, parameters)?;
        let curve = NelsonSiegelCurve::new(
            name,
            [parameters[0], parameters[1], parameters[2], parameters[3]],
        )?;
        Ok(Arc::new(curve))
    }

    /// Long rate as the level, short minus long as the slope, no curvature.
    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        match (rates.first(), rates.last()) {
            (Some(&short), Some(&long)) => vec![long, short - long, 0.0, DEFAULT_TAU],
            _ => vec![0.0, 0.0, 0.0, DEFAULT_TAU],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate() {
        let curve = NelsonSiegelGenerator::new()
            .generate("ns", &[0.04, -0.01, 0.0, 1.5])
            .unwrap();

        assert_eq!(curve.number_of_parameters(), 4);
        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_tau_propagates() {
        assert!(matches!(
            NelsonSiegelGenerator::new().generate("ns", &[0.04, -0.01, 0.0, -1.0]),
            Err(CurveError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_initial_guess_reproduces_end_rates() {
        let guess = NelsonSiegelGenerator::new().initial_guess(&[0.01, 0.02, 0.035]);
        assert_eq!(guess.len(), 4);

        let curve = NelsonSiegelGenerator::new().generate("ns", &guess).unwrap();
        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.01, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(1000.0).unwrap(), 0.035, epsilon = 1e-4);
    }
}
