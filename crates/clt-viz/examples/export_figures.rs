//! Run every experiment and write the figures as JSON
//!
//! Usage: `cargo run -p clt-viz --example export_figures -- [prefix]`

use clt_confidence::CiConfig;
use clt_distributions::DistributionRegistry;
use clt_sampling::{averaging_sweep, mean_std_experiment, raw_sampling, AveragingConfig};
use clt_viz::{
    averaging_figure, interval_figure, mean_std_figure, pdf_figure, raw_sampling_figure,
    ExperimentVisualizer, JsonVisualizer, PlotConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let prefix = std::env::args().nth(1).unwrap_or_else(|| "clt".to_string());
    let registry = DistributionRegistry::standard()?;
    let averaging = AveragingConfig::default();
    let plot = PlotConfig::default();
    let visualizer = JsonVisualizer::new();
    let mut rng = StdRng::seed_from_u64(42);

    visualizer.record_figure(pdf_figure(&registry, &plot)?)?;

    let draws = registry
        .iter()
        .map(|(_, dist)| raw_sampling(dist, averaging.n_samples, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;
    visualizer.record_figure(raw_sampling_figure(&registry, &draws, &plot)?)?;

    for (label, dist) in registry.iter() {
        let outcomes = averaging_sweep(dist, averaging.n_samples, &averaging.m_list, &mut rng)?;
        for outcome in &outcomes {
            println!("{}", outcome.summary_line(label));
        }
        visualizer.record_figure(averaging_figure(label, &outcomes, &plot)?)?;

        let mean_std = mean_std_experiment(dist, averaging.n_samples, averaging.m, &mut rng)?;
        visualizer.record_figure(mean_std_figure(label, &mean_std, &plot)?)?;
    }

    let result = CiConfig::default().experiment()?.run(&mut rng)?;
    println!("{result}");
    visualizer.record_figure(interval_figure(&result))?;

    for path in visualizer.write_all(&prefix)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
