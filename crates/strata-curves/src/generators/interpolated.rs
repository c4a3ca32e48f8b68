use std::sync::Arc;

use strata_math::interpolation::InterpolationMethod;

use super::{check_parameters, CurveGenerator};
use crate::curves::InterpolatedCurve;
use crate::error::CurveResult;
use crate::traits::SharedCurve;

/// Generates an interpolated curve with one rate parameter per node.
#[derive(Debug, Clone)]
pub struct InterpolatedGenerator {
    nodes: Vec<f64>,
    method: InterpolationMethod,
}

impl InterpolatedGenerator {
    /// Creates a generator over fixed node times.
    pub fn new(nodes: Vec<f64>, method: InterpolationMethod) -> Self {
        Self { nodes, method }
    }

    /// Returns the node times.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }
}

impl CurveGenerator for InterpolatedGenerator {
    fn number_of_parameters(&self) -> usize {
        self.nodes.len()
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        check_parameters(name, self.nodes.len(), parameters)?;
        let curve = InterpolatedCurve::new(name, self.nodes.clone(), parameters.to_vec(), self.method)?;
        Ok(Arc::new(curve))
    }
}
