use anyhow::{bail, Context};
use clustertune::{Chromosome, FitnessEvaluator, ParameterSpace, TunerConfig};
use std::path::Path;

/// Evaluate the catalog's seed parameter vector once against the external
/// clustering benchmark and print the resulting metrics. A quick way to
/// check the benchmark wiring before handing the evaluator to a tuning loop.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("Usage: {} <tuner-config.toml>", args[0]);
    }

    let config = TunerConfig::load(Path::new(&args[1]))
        .with_context(|| format!("Loading tuner config from {}", args[1]))?;
    let space = ParameterSpace::clustering()?;

    let mut evaluator = FitnessEvaluator::new(
        space.clone(),
        &config.benchmark_command,
        &config.config_path,
        &config.results_path,
    );
    if let Some(key) = &config.results_key {
        evaluator = evaluator.with_results_key(key);
    }

    log::info!(
        "Driver settings: crossover '{}', mutation probability {}, seed {:?}",
        config.crossover_policy,
        config.mutation_probability,
        config.seed
    );

    let seed = Chromosome::seed(&space);
    log::info!("Evaluating seed parameter vector");
    let metrics = evaluator.evaluate(&seed)?;

    println!("{}", metrics);
    if !metrics.is_complete() {
        log::warn!("Evaluation incomplete; some metrics kept their sentinel value");
    }

    Ok(())
}
