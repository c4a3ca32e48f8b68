use std::sync::Arc;

use strata_math::interpolation::InterpolationMethod;

use super::{check_parameters, CurveGenerator};
use crate::curves::DiscountFactorCurve;
use crate::error::CurveResult;
use crate::traits::SharedCurve;

/// Generates a curve interpolated on discount factors, one parameter per
/// node.
#[derive(Debug, Clone)]
pub struct DiscountFactorGenerator {
    nodes: Vec<f64>,
    method: InterpolationMethod,
}

impl DiscountFactorGenerator {
    /// Creates a generator over fixed node times, all after time zero.
    pub fn new(nodes: Vec<f64>, method: InterpolationMethod) -> Self {
        Self { nodes, method }
    }

    /// Returns the node times.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }
}

impl CurveGenerator for DiscountFactorGenerator {
    fn number_of_parameters(&self) -> usize {
        self.nodes.len()
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        check_parameters(name, self.nodes.len(), parameters)?;
        let curve =
            DiscountFactorCurve::new(name, self.nodes.clone(), parameters.to_vec(), self.method)?;
        Ok(Arc::new(curve))
    }

    /// Converts zero rates at the nodes to discount factors.
    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        self.nodes
            .iter()
            .zip(rates)
            .map(|(t, r)| (-r * t).exp())
            .collect()
    }
}
