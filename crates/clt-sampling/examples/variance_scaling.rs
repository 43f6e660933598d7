//! Prints the variance scaling table for each reference distribution

use clt_distributions::DistributionRegistry;
use clt_sampling::{variance_scaling_table, AveragingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AveragingConfig::default();
    config.validate()?;

    let registry = DistributionRegistry::standard()?;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=== Variance Scaling ===");
    for (label, dist) in registry.iter() {
        let table = variance_scaling_table(dist, config.n_samples, &config.m_list, &mut rng)?
            .labelled(label);
        println!("{table}");
    }

    Ok(())
}
