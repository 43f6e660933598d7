//! Sample means (approximately Normal) vs sample standard deviations

use clt_distributions::DistributionRegistry;
use clt_sampling::{mean_std_experiment, AveragingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn summarize(values: &[f64]) -> (f64, f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (mean, min, max)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AveragingConfig::default();
    let registry = DistributionRegistry::standard()?;
    let mut rng = StdRng::seed_from_u64(42);

    for (label, dist) in registry.iter() {
        let outcome = mean_std_experiment(dist, config.n_samples, config.m, &mut rng)?;
        let (mean_avg, mean_min, mean_max) = summarize(&outcome.sample_means);
        let (std_avg, std_min, std_max) = summarize(&outcome.sample_std_devs);

        println!("{label}: Sample Means vs Stds (m={})", outcome.m);
        println!(
            "  means: avg={mean_avg:.3} range=[{mean_min:.3}, {mean_max:.3}] \
             CLT ~ N({:.3}, {:.3}^2)",
            outcome.theoretical_mean, outcome.theoretical_std_of_mean
        );
        println!("  stds:  avg={std_avg:.3} range=[{std_min:.3}, {std_max:.3}] (no CLT claim)");
    }

    Ok(())
}
