use std::sync::Arc;

use super::{check_parameters, CurveGenerator};
use crate::curves::ConstantCurve;
use crate::error::CurveResult;
use crate::traits::SharedCurve;

/// Generates a flat curve from a single rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantGenerator;

impl ConstantGenerator {
    /// Creates a constant generator.
    pub fn new() -> Self {
        Self
    }
}

impl CurveGenerator for ConstantGenerator {
    fn number_of_parameters(&self) -> usize {
        1
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        check_parameters(name, 1, parameters)?;
        Ok(Arc::new(ConstantCurve::new(name, parameters[0])))
    }

    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        vec![rates.first().copied().unwrap_or(0.0)]
    }
}
