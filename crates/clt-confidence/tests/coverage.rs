//! Empirical coverage of repeated confidence intervals

use approx::assert_relative_eq;
use clt_confidence::{
    run_ci_experiment, CiConfig, CiExperiment, ConfidenceLevel, Error, StandardErrorModel,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_miss_rate_matches_nominal_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let result = run_ci_experiment(100_000, 30, 67.0, 10.0, 0.95, &mut rng).unwrap();

    assert_eq!(result.total_count(), 100_000);
    let rate = result.miss_rate();
    assert!((0.03..=0.07).contains(&rate), "miss rate {rate}");
    assert_relative_eq!(result.expected_miss_rate(), 0.05, epsilon = 1e-12);
}

#[test]
fn test_ninety_percent_coverage() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let result = run_ci_experiment(20_000, 10, 0.0, 1.0, 0.90, &mut rng).unwrap();
    let rate = result.miss_rate();
    assert!((0.08..=0.12).contains(&rate), "miss rate {rate}");
}

#[test]
fn test_half_confidence_uses_quartile_critical_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let result = run_ci_experiment(20_000, 30, 67.0, 10.0, 0.5, &mut rng).unwrap();
    assert_relative_eq!(result.critical_value(), 0.6745, epsilon = 1e-3);

    let rate = result.miss_rate();
    assert!((0.46..=0.54).contains(&rate), "miss rate {rate}");
}

#[test]
fn test_extreme_confidence_rarely_misses() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let result = run_ci_experiment(1_000, 30, 67.0, 10.0, 0.999999, &mut rng).unwrap();
    assert!(result.critical_value() > 4.8);
    assert!(result.miss_count() <= 1);
}

#[test]
fn test_confidence_rounding_to_one_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let result = run_ci_experiment(5, 30, 67.0, 10.0, 1.0 - f64::EPSILON / 2.0, &mut rng);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_single_observation_samples() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = run_ci_experiment(5_000, 1, 67.0, 10.0, 0.95, &mut rng).unwrap();

    let z = result.critical_value();
    for ci in result.intervals() {
        assert_relative_eq!(ci.margin_of_error(), z * 10.0, epsilon = 1e-9);
    }
    let rate = result.miss_rate();
    assert!((0.03..=0.07).contains(&rate), "miss rate {rate}");
}

#[test]
fn test_identical_seeds_identical_results() {
    let mut a = ChaCha8Rng::seed_from_u64(77);
    let mut b = ChaCha8Rng::seed_from_u64(77);
    let first = run_ci_experiment(200, 30, 67.0, 10.0, 0.95, &mut a).unwrap();
    let second = run_ci_experiment(200, 30, 67.0, 10.0, 0.95, &mut b).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_estimated_sigma_coverage() {
    let experiment = CiConfig::default()
        .with_n_samples(20_000)
        .with_sample_size(5)
        .with_model(StandardErrorModel::EstimatedSigma)
        .experiment()
        .unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let result = experiment.run(&mut rng).unwrap();
    assert_relative_eq!(result.critical_value(), 2.776, epsilon = 1e-3);
    assert_eq!(result.model(), StandardErrorModel::EstimatedSigma);

    let rate = result.miss_rate();
    assert!((0.04..=0.06).contains(&rate), "miss rate {rate}");
}

#[test]
fn test_default_config_run() {
    let experiment = CiConfig::default().experiment().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = experiment.run(&mut rng).unwrap();

    assert_eq!(result.total_count(), 100);
    assert_eq!(result.true_mean(), 67.0);
    assert_eq!(result.confidence(), ConfidenceLevel::NINETY_FIVE);

    let report = result.to_string();
    assert!(report.contains("100"));
}

#[test]
fn test_rejects_invalid_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(run_ci_experiment(0, 30, 67.0, 10.0, 0.95, &mut rng).is_err());
    assert!(run_ci_experiment(100, 0, 67.0, 10.0, 0.95, &mut rng).is_err());
    assert!(run_ci_experiment(100, 30, 67.0, 10.0, 1.5, &mut rng).is_err());
    assert!(run_ci_experiment(100, 30, 67.0, 0.0, 0.95, &mut rng).is_err());
    assert!(CiExperiment::new(100, 30, f64::INFINITY, 10.0, 0.95).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_miss_count_matches_intervals(
        seed in any::<u64>(),
        n_samples in 1usize..200,
        sample_size in 1usize..40,
        confidence in 0.5f64..0.995,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = run_ci_experiment(n_samples, sample_size, 67.0, 10.0, confidence, &mut rng)
            .unwrap();

        let misses = result.intervals().iter().filter(|ci| !ci.contains_truth).count();
        prop_assert_eq!(result.miss_count(), misses);
        prop_assert_eq!(result.total_count(), n_samples);
        prop_assert!(result.miss_count() <= n_samples);
        for ci in result.intervals() {
            prop_assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper);
            prop_assert_eq!(ci.contains_truth, ci.lower <= 67.0 && 67.0 <= ci.upper);
        }
    }
}
