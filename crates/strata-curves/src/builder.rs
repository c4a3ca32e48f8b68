//! Builds a set of curves from one flat parameter vector.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::bundle::CurveBundle;
use crate::error::{CurveError, CurveResult};
use crate::generators::CurveGenerator;

/// An ordered list of named curve generators sharing one parameter vector.
///
/// Each generator owns a contiguous block of the vector, in entry order.
/// Curves are built in the same order and every built curve is visible to
/// the generators after it, so a spread generator may reference any curve
/// defined earlier. Curves are never reordered.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strata_curves::prelude::*;
///
/// let builder = CurveSetBuilder::new()
///     .with_generator(
///         "USD-OIS",
///         Arc::new(InterpolatedGenerator::new(vec![1.0, 5.0], InterpolationMethod::Linear)),
///     )
///     .with_generator("USD-OIS-TURN", Arc::new(ConstantGenerator::new()));
///
/// assert_eq!(builder.number_of_parameters(), 3);
/// let curves = builder.evaluate(&[0.01, 0.02, 0.0]).unwrap();
/// assert_eq!(curves.names().collect::<Vec<_>>(), vec!["USD-OIS", "USD-OIS-TURN"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveSetBuilder {
    entries: Vec<(String, Arc<dyn CurveGenerator>)>,
}

impl CurveSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a generator for the named curve.
    ///
    /// Re-using a name replaces that entry's generator without moving it.
    #[must_use]
    pub fn with_generator(mut self, name: impl Into<String>, generator: Arc<dyn CurveGenerator>) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = generator,
            None => self.entries.push((name, generator)),
        }
        self
    }

    /// Returns the number of curves this builder produces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no generators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the curve names in build order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the total number of parameters across all generators.
    #[must_use]
    pub fn number_of_parameters(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, generator)| generator.number_of_parameters())
            .sum()
    }

    /// Builds every curve from `parameters` with no other curves in scope.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `parameters.len()` differs from
    /// [`number_of_parameters`](Self::number_of_parameters), or the first
    /// error raised by a generator.
    pub fn evaluate(&self, parameters: &[f64]) -> CurveResult<CurveBundle> {
        self.evaluate_with(&CurveBundle::new(), parameters)
    }

    /// Builds every curve from `parameters`, letting generators resolve
    /// curves from `known` as well as curves built earlier in this set.
    ///
    /// Only the newly built curves are returned; `known` is not modified.
    pub fn evaluate_with(&self, known: &CurveBundle, parameters: &[f64]) -> CurveResult<CurveBundle> {
        let expected = self.number_of_parameters();
        if parameters.len() != expected {
            return Err(CurveError::dimension_mismatch(
                "curve set parameter vector",
                expected,
                parameters.len(),
            ));
        }

        let mut context = known.clone();
        let mut built = CurveBundle::new();
        let mut offset = 0;
        for (name, generator) in &self.entries {
            let count = generator.number_of_parameters();
            let block = &parameters[offset..offset + count];
            offset += count;

            let curve = generator.generate_with_bundle(name, &context, block)?;
            if curve.name() != name {
                return Err(CurveError::invalid_value(format!(
                    "generator for '{name}' produced a curve named '{}'",
                    curve.name()
                )));
            }
            trace!(curve = %name, parameters = count, "built curve");
            context.insert(Arc::clone(&curve));
            built.insert(curve);
        }

        debug!(curves = built.len(), parameters = expected, "built curve set");
        Ok(built)
    }

    /// Collects each generator's starting guess into one parameter vector.
    ///
    /// `rates` holds one slice of market rates per curve, in build order.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the number of slices differs from the
    /// number of curves, or if a generator's guess has the wrong length.
    pub fn initial_guess(&self, rates: &[&[f64]]) -> CurveResult<Vec<f64>> {
        if rates.len() != self.entries.len() {
            return Err(CurveError::dimension_mismatch(
                "initial guess rate slices",
                self.entries.len(),
                rates.len(),
            ));
        }

        let mut guess = Vec::with_capacity(self.number_of_parameters());
        for ((name, generator), curve_rates) in self.entries.iter().zip(rates) {
            let block = generator.initial_guess(curve_rates);
            if block.len() != generator.number_of_parameters() {
                return Err(CurveError::dimension_mismatch(
                    format!("initial guess for '{name}'"),
                    generator.number_of_parameters(),
                    block.len(),
                ));
            }
            guess.extend(block);
        }
        Ok(guess)
    }
}
