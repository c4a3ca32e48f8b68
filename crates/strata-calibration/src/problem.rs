//! The inputs shared by the objective and Jacobian functions.

use std::collections::HashSet;
use std::sync::Arc;

use strata_curves::{CurveBundle, CurveSetBuilder};

use crate::error::CalibrationResult;
use crate::instruments::CalibrationInstrument;

/// Curves to solve for, curves held fixed, and the instruments to fit.
///
/// Curves in `known` are never re-solved: their names form the fixed set
/// passed to the sensitivity calculator, so they own no Jacobian columns.
#[derive(Debug, Clone)]
pub struct CalibrationProblem {
    known: CurveBundle,
    builder: CurveSetBuilder,
    instruments: Vec<Arc<dyn CalibrationInstrument>>,
    fixed: HashSet<String>,
}

impl CalibrationProblem {
    /// Creates a problem with no known curves.
    pub fn new(builder: CurveSetBuilder, instruments: Vec<Arc<dyn CalibrationInstrument>>) -> Self {
        Self::with_known(CurveBundle::new(), builder, instruments)
    }

    /// Creates a problem whose generators may build on the curves in `known`.
    pub fn with_known(
        known: CurveBundle,
        builder: CurveSetBuilder,
        instruments: Vec<Arc<dyn CalibrationInstrument>>,
    ) -> Self {
        let fixed = known.names().map(str::to_string).collect();
        Self {
            known,
            builder,
            instruments,
            fixed,
        }
    }

    /// Returns the known curves.
    #[must_use]
    pub fn known(&self) -> &CurveBundle {
        &self.known
    }

    /// Returns the curve set builder.
    #[must_use]
    pub fn builder(&self) -> &CurveSetBuilder {
        &self.builder
    }

    /// Returns the instruments in residual order.
    #[must_use]
    pub fn instruments(&self) -> &[Arc<dyn CalibrationInstrument>] {
        &self.instruments
    }

    /// Returns the names of the curves held fixed.
    #[must_use]
    pub fn fixed_curves(&self) -> &HashSet<String> {
        &self.fixed
    }

    /// Returns the number of parameters being solved for.
    #[must_use]
    pub fn number_of_parameters(&self) -> usize {
        self.builder.number_of_parameters()
    }

    /// Builds the curves for `parameters` and merges them over a copy of
    /// the known curves.
    pub fn merged_curves(&self, parameters: &[f64]) -> CalibrationResult<CurveBundle> {
        let built = self.builder.evaluate_with(&self.known, parameters)?;
        let mut merged = self.known.clone();
        merged.add_all(&built);
        Ok(merged)
    }
}
