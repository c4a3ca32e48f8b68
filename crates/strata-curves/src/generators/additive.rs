use std::sync::Arc;

use tracing::trace;

use super::{check_parameters, CurveGenerator};
use crate::bundle::CurveBundle;
use crate::curves::AdditiveSpreadCurve;
use crate::error::{CurveError, CurveResult};
use crate::traits::SharedCurve;

/// Generates a curve as the sum (or difference) of curves built by several
/// sub-generators.
///
/// The parameter slice is cut into contiguous sub-blocks, one per
/// sub-generator in order. Sub-curves are named `"{name}-{i}"` and stay
/// internal to the combined curve: only the curves the first sub-curve was
/// built on are reported as underlying, since their blocks lead the layout.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strata_curves::generators::{AdditiveSpreadGenerator, ConstantGenerator, CurveGenerator};
///
/// let constant: Arc<dyn CurveGenerator> = Arc::new(ConstantGenerator::new());
/// let generator = AdditiveSpreadGenerator::new(vec![constant.clone(), constant], false).unwrap();
///
/// let curve = generator.generate("EUR-6M", &[0.02, 0.01]).unwrap();
/// assert!((curve.zero_rate(7.0).unwrap() - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveSpreadGenerator {
    generators: Vec<Arc<dyn CurveGenerator>>,
    subtract: bool,
}

impl AdditiveSpreadGenerator {
    /// Creates a spread generator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `generators` is empty.
    pub fn new(generators: Vec<Arc<dyn CurveGenerator>>, subtract: bool) -> CurveResult<Self> {
        if generators.is_empty() {
            return Err(CurveError::invalid_value(
                "spread generator needs at least one sub-generator",
            ));
        }
        Ok(Self {
            generators,
            subtract,
        })
    }

    /// Returns the sub-generators.
    #[must_use]
    pub fn generators(&self) -> &[Arc<dyn CurveGenerator>] {
        &self.generators
    }

    fn build(
        &self,
        name: &str,
        bundle: Option<&CurveBundle>,
        parameters: &[f64],
    ) -> CurveResult<SharedCurve> {
        check_parameters(name, self.number_of_parameters(), parameters)?;

        let mut components = Vec::with_capacity(self.generators.len());
        let mut offset = 0;
        for (i, generator) in self.generators.iter().enumerate() {
            let count = generator.number_of_parameters();
            let block = &parameters[offset..offset + count];
            offset += count;

            let sub_name = format!("{name}-{i}");
            trace!(curve = %sub_name, parameters = count, "building spread component");
            let component = match bundle {
                Some(bundle) => generator.generate_with_bundle(&sub_name, bundle, block)?,
                None => generator.generate(&sub_name, block)?,
            };
            components.push(component);
        }

        let underlying = components
            .first()
            .map(|c| c.underlying_curve_names())
            .unwrap_or_default();
        let curve =
            AdditiveSpreadCurve::new(name, components, self.subtract)?.with_underlying(underlying);
        Ok(Arc::new(curve))
    }
}

impl CurveGenerator for AdditiveSpreadGenerator {
    fn number_of_parameters(&self) -> usize {
        self.generators.iter().map(|g| g.number_of_parameters()).sum()
    }

    fn generate(&self, name: &str, parameters: &[f64]) -> CurveResult<SharedCurve> {
        self.build(name, None, parameters)
    }

    fn generate_with_bundle(
        &self,
        name: &str,
        bundle: &CurveBundle,
        parameters: &[f64],
    ) -> CurveResult<SharedCurve> {
        self.build(name, Some(bundle), parameters)
    }

    /// Hands each sub-generator its own slice of `rates`, clamped to what
    /// is available.
    fn initial_guess(&self, rates: &[f64]) -> Vec<f64> {
        let mut guess = Vec::with_capacity(self.number_of_parameters());
        let mut offset = 0;
        for generator in &self.generators {
            let count = generator.number_of_parameters();
            let start = offset.min(rates.len());
            let end = (offset + count).min(rates.len());
            let mut block = generator.initial_guess(&rates[start..end]);
            block.resize(count, 0.0);
            guess.extend(block);
            offset += count;
        }
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{ConstantGenerator, ExistingSpreadGenerator, InterpolatedGenerator};
    use approx::assert_relative_eq;
    use strata_math::interpolation::InterpolationMethod;

    fn two_constants(subtract: bool) -> AdditiveSpreadGenerator {
        let constant: Arc<dyn CurveGenerator> = Arc::new(ConstantGenerator::new());
        AdditiveSpreadGenerator::new(vec![Arc::clone(&constant), constant], subtract).unwrap()
    }

    #[test]
    fn test_add() {
        let curve = two_constants(false).generate("sum", &[0.02, 0.01]).unwrap();
        for t in [0.1, 1.0, 30.0] {
            assert_relative_eq!(curve.zero_rate(t).unwrap(), 0.03, epsilon = 1e-15);
        }
        assert!(curve.underlying_curve_names().is_empty());
    }

    #[test]
    fn test_subtract() {
        let curve = two_constants(true).generate("diff", &[0.05, 0.02]).unwrap();
        assert_relative_eq!(curve.zero_rate(4.0).unwrap(), 0.03, epsilon = 1e-15);
    }

    #[test]
    fn test_slices_in_order() {
        let base: Arc<dyn CurveGenerator> =
            Arc::new(InterpolatedGenerator::new(vec![1.0, 2.0], InterpolationMethod::Linear));
        let spread: Arc<dyn CurveGenerator> = Arc::new(ConstantGenerator::new());
        let generator = AdditiveSpreadGenerator::new(vec![base, spread], false).unwrap();
        assert_eq!(generator.number_of_parameters(), 3);

        let curve = generator.generate("c", &[0.01, 0.03, 0.005]).unwrap();
        assert_relative_eq!(curve.zero_rate(1.5).unwrap(), 0.025, epsilon = 1e-12);
        assert_eq!(curve.parameter_sensitivity(1.5).unwrap(), vec![0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_leading_existing_spread_reports_its_base() {
        let mut bundle = CurveBundle::new();
        bundle.insert(Arc::new(crate::curves::ConstantCurve::new("OIS", 0.02)));
        let over_ois: Arc<dyn CurveGenerator> = Arc::new(ExistingSpreadGenerator::new(
            Arc::new(ConstantGenerator::new()),
            false,
            "OIS",
        ));
        let constant: Arc<dyn CurveGenerator> = Arc::new(ConstantGenerator::new());
        let generator = AdditiveSpreadGenerator::new(vec![over_ois, constant], false).unwrap();

        let curve = generator.generate_with_bundle("c", &bundle, &[0.001, 0.002]).unwrap();

        assert_eq!(curve.underlying_curve_names(), vec!["OIS"]);
        assert_eq!(curve.number_of_parameters(), 3);
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.023, epsilon = 1e-15);
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            two_constants(false).generate("sum", &[0.02]),
            Err(CurveError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_generators() {
        assert!(AdditiveSpreadGenerator::new(Vec::new(), false).is_err());
    }

    #[test]
    fn test_initial_guess_slices_rates() {
        assert_eq!(two_constants(false).initial_guess(&[0.02, 0.001]), vec![0.02, 0.001]);
        assert_eq!(two_constants(false).initial_guess(&[0.02]), vec![0.02, 0.0]);
    }
}
