//! Averaging effect: one summary line per distribution and m

use clt_distributions::DistributionRegistry;
use clt_sampling::{averaging_sweep, AveragingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AveragingConfig::default();
    let registry = DistributionRegistry::standard()?;
    let mut rng = StdRng::seed_from_u64(42);

    for (label, dist) in registry.iter() {
        println!("\n=== Averaging effect - {label} ===");
        for outcome in averaging_sweep(dist, config.n_samples, &config.m_list, &mut rng)? {
            println!("{}", outcome.labelled(label));
        }
    }

    Ok(())
}
