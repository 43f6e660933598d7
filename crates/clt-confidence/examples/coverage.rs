//! Repeated confidence intervals around the mean of N(67, 10²)

use clt_confidence::{CiConfig, StandardErrorModel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    let known = CiConfig::default().experiment()?.run(&mut rng)?;
    println!("{known}");
    for (i, ci) in known.intervals().iter().enumerate().filter(|(_, ci)| !ci.contains_truth) {
        println!("  miss #{i}: {ci}");
    }

    let config = CiConfig::default().with_model(StandardErrorModel::EstimatedSigma);
    let estimated = config.experiment()?.run(&mut rng)?;
    println!(
        "\nEstimated sigma (t = {:.4}, df = {}):",
        estimated.critical_value(),
        config.sample_size - 1
    );
    println!("{estimated}");

    Ok(())
}
