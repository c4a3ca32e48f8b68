use std::sync::Arc;

use strata_math::interpolation::InterpolationMethod;

use super::{check_parameters, CurveGenerator};
use crate::curves::InterpolatedCurve;
use crate::error::CurveResult;
use crate::traits::SharedCurve;

/// Generates an interpolated curve pinned to a zero rate at an anchor time.
///
/// One parameter per node; the anchor is an extra node that carries no
/// parameter. Mostly used as a spread component, where the anchor fixes the
/// spread at zero.
#[derive(Debug, Clone)]
pub struct AnchoredInterpolatedGenerator {
    nodes: Vec<f64>,
    method: InterpolationMethod,
    anchor: f64,
}

impl AnchoredInterpolatedGenerator {
    /// Creates a generator over `nodes`, anchored at `anchor`.
    pub fn new(nodes: Vec<f64>, method: InterpolationMethod, anchor: f64) -> Self {
        Self {
            nodes,
            method,
            anchor,
        }
    }

    /// Returns the node times, excluding the anchor.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Returns the anchor time.
    #[must_use]
    pub fn anchor(&self) -> f64 {
        self.anchor
    }
}

impl CurveGenerator for AnchoredInterpolatedGenerator {
    fn number_of_parameters(&self) -> usize {
        self.nodes.len()
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        check_parameters(name, self.nodes.len(), parameters)?;
        let curve = InterpolatedCurve::anchored(
            name,
            self.nodes.clone(),
            parameters.to_vec(),
            self.method,
            self.anchor,
        )?;
        Ok(Arc::new(curve))
    }
}
