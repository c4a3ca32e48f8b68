//! Integration test: build a discount curve and a LIBOR projection curve
//! from one parameter vector.
//!
//! | Curve | Generator | Parameters |
//! |-------|-----------|------------|
//! | DiscountUSD | Interpolated, 5 nodes | p[0..5] |
//! | Libor3M | Spread over DiscountUSD, constant | p[5] |

use std::sync::Arc;

use approx::assert_relative_eq;
use proptest::prelude::*;
use strata_curves::prelude::*;

const NODES: [f64; 5] = [0.5, 1.0, 2.0, 5.0, 10.0];

fn discount_and_libor() -> CurveSetBuilder {
    CurveSetBuilder::new()
        .with_generator(
            "DiscountUSD",
            Arc::new(InterpolatedGenerator::new(NODES.to_vec(), InterpolationMethod::Linear)),
        )
        .with_generator(
            "Libor3M",
            Arc::new(ExistingSpreadGenerator::new(
                Arc::new(ConstantGenerator::new()),
                false,
                "DiscountUSD",
            )),
        )
}

#[test]
fn test_discount_plus_libor_spread() {
    let parameters = [0.010, 0.012, 0.015, 0.020, 0.024, 0.0025];
    let builder = discount_and_libor();
    assert_eq!(builder.number_of_parameters(), 6);

    let curves = builder.evaluate(&parameters).unwrap();
    assert_eq!(curves.len(), 2);

    let discount = curves.get_curve("DiscountUSD").unwrap();
    let libor = curves.get_curve("Libor3M").unwrap();
    for t in [0.25, 0.5, 0.75, 1.5, 3.0, 7.0, 10.0, 15.0] {
        assert_relative_eq!(
            libor.zero_rate(t).unwrap(),
            discount.zero_rate(t).unwrap() + parameters[5],
            epsilon = 1e-15
        );
    }

    assert_eq!(libor.number_of_parameters(), 6);
    assert_eq!(libor.underlying_curve_names()[0], "DiscountUSD");
}

#[test]
fn test_spread_parameter_sensitivity_layout() {
    let parameters = [0.010, 0.012, 0.015, 0.020, 0.024, 0.0025];
    let curves = discount_and_libor().evaluate(&parameters).unwrap();
    let libor = curves.get_curve("Libor3M").unwrap();

    // dirty layout: discount nodes first, then the spread
    let sensitivity = libor.parameter_sensitivity(3.5).unwrap();
    assert_eq!(sensitivity.len(), 6);
    assert_relative_eq!(sensitivity[2], 0.5, epsilon = 1e-12);
    assert_relative_eq!(sensitivity[3], 0.5, epsilon = 1e-12);
    assert_relative_eq!(sensitivity[5], 1.0, epsilon = 1e-12);
}

#[test]
fn test_reversed_order_fails() {
    let builder = CurveSetBuilder::new()
        .with_generator(
            "Libor3M",
            Arc::new(ExistingSpreadGenerator::new(
                Arc::new(ConstantGenerator::new()),
                false,
                "DiscountUSD",
            )),
        )
        .with_generator(
            "DiscountUSD",
            Arc::new(InterpolatedGenerator::new(NODES.to_vec(), InterpolationMethod::Linear)),
        );

    let err = builder.evaluate(&[0.0025, 0.010, 0.012, 0.015, 0.020, 0.024]).unwrap_err();
    assert_eq!(err, CurveError::curve_not_found("DiscountUSD"));
}

#[test]
fn test_wrong_vector_length() {
    let err = discount_and_libor().evaluate(&[0.01; 5]).unwrap_err();
    assert!(matches!(
        err,
        CurveError::DimensionMismatch {
            expected: 6,
            actual: 5,
            ..
        }
    ));
}

#[test]
fn test_merge_with_known_data() {
    let mut known = CurveBundle::new();
    known.insert(Arc::new(ConstantCurve::new("EUR-OIS", 0.03)));

    let built = discount_and_libor()
        .evaluate_with(&known, &[0.01, 0.01, 0.01, 0.01, 0.01, 0.001])
        .unwrap();
    let mut merged = known.clone();
    merged.add_all(&built);

    assert_eq!(
        merged.names().collect::<Vec<_>>(),
        vec!["EUR-OIS", "DiscountUSD", "Libor3M"]
    );
    assert_eq!(known.len(), 1);
}

proptest! {
    #[test]
    fn prop_parameter_count_matches_vector(
        counts in prop::collection::vec(1usize..5, 1..5),
        extra in 1usize..3,
    ) {
        let mut builder = CurveSetBuilder::new();
        for (i, count) in counts.iter().enumerate() {
            let nodes: Vec<f64> = (1..=*count).map(|k| k as f64).collect();
            let generator: Arc<dyn CurveGenerator> = if *count == 1 {
                Arc::new(ConstantGenerator::new())
            } else {
                Arc::new(InterpolatedGenerator::new(nodes, InterpolationMethod::Linear))
            };
            builder = builder.with_generator(format!("curve-{i}"), generator);
        }
        let total: usize = counts.iter().sum();
        prop_assert_eq!(builder.number_of_parameters(), total);

        let curves = builder.evaluate(&vec![0.01; total]).unwrap();
        prop_assert_eq!(curves.len(), counts.len());

        let too_long = builder.evaluate(&vec![0.01; total + extra]);
        let is_mismatch = matches!(too_long, Err(CurveError::DimensionMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}
