use crate::bridge;
use crate::error::Result;
use crate::evaluation::metrics::ClusteringMetrics;
use crate::genetics::Chromosome;
use crate::params::ParameterSpace;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Scores a candidate chromosome by materializing its decoded parameters
/// into the benchmark's configuration file, running the benchmark
/// executable, and parsing the result file it leaves behind.
///
/// The subprocess call is blocking; no lock is held across it, and distinct
/// evaluators never share a configuration or result path, so evaluations
/// parallelize freely (see [`FitnessEvaluator::evaluate_population`]).
pub struct FitnessEvaluator {
    space: ParameterSpace,
    benchmark_cmd: PathBuf,
    config_path: PathBuf,
    results_path: PathBuf,
    results_key: Option<String>,
}

impl FitnessEvaluator {
    pub fn new(
        space: ParameterSpace,
        benchmark_cmd: impl Into<PathBuf>,
        config_path: impl Into<PathBuf>,
        results_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            space,
            benchmark_cmd: benchmark_cmd.into(),
            config_path: config_path.into(),
            results_path: results_path.into(),
            results_key: None,
        }
    }

    /// Configuration key under which the benchmark expects its result-file
    /// path. When set, each evaluation writes its own result path into the
    /// configuration, which is what keeps per-worker result files apart.
    pub fn with_results_key(mut self, key: impl Into<String>) -> Self {
        self.results_key = Some(key.into());
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    /// Decode the chromosome and write every parameter value into the
    /// configuration file under its catalog title.
    pub fn write_parameters(&self, chromosome: &Chromosome) -> Result<()> {
        for d in self.space.descriptors() {
            let value = chromosome.value(d.param, &self.space);
            bridge::update_value(&self.config_path, d.title, value)?;
        }
        if let Some(key) = &self.results_key {
            bridge::update_value(&self.config_path, key, self.results_path.display())?;
        }
        Ok(())
    }

    /// Run the benchmark synchronously against the configuration file. A
    /// non-zero exit is logged, not an error: it surfaces downstream as a
    /// missing or short result file and therefore as sentinel metrics.
    pub fn run_benchmark(&self) -> Result<()> {
        log::debug!(
            "Running {} {}",
            self.benchmark_cmd.display(),
            self.config_path.display()
        );
        let status = Command::new(&self.benchmark_cmd)
            .arg(&self.config_path)
            .status()?;
        if !status.success() {
            log::warn!(
                "Benchmark {} exited with {} for config {}",
                self.benchmark_cmd.display(),
                status,
                self.config_path.display()
            );
        }
        Ok(())
    }

    /// Full evaluation of one candidate: write parameters, run the
    /// benchmark, parse the result file. A stale result file from an
    /// earlier run is removed first so it can never masquerade as this
    /// run's output.
    pub fn evaluate(&self, chromosome: &Chromosome) -> Result<ClusteringMetrics> {
        self.write_parameters(chromosome)?;
        match fs::remove_file(&self.results_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.run_benchmark()?;
        let metrics = ClusteringMetrics::from_file(&self.results_path);
        if !metrics.is_complete() {
            log::warn!(
                "Incomplete metrics from {}, candidate scored as failed",
                self.results_path.display()
            );
        }
        Ok(metrics)
    }

    /// Evaluate and reduce to a scalar. The reduction is caller-defined;
    /// it must treat sentinel fields as maximally unfavorable.
    pub fn fitness<F>(&self, chromosome: &Chromosome, reduce: F) -> Result<f64>
    where
        F: Fn(&ClusteringMetrics) -> f64,
    {
        Ok(reduce(&self.evaluate(chromosome)?))
    }

    /// Evaluator for one parallel worker: the base configuration is copied
    /// to a per-worker path and the result path gets the same suffix, so
    /// concurrent evaluations never touch each other's files.
    pub fn for_worker(&self, index: usize) -> Result<Self> {
        let config_path = worker_path(&self.config_path, index);
        fs::copy(&self.config_path, &config_path)?;
        Ok(Self {
            space: self.space.clone(),
            benchmark_cmd: self.benchmark_cmd.clone(),
            config_path,
            results_path: worker_path(&self.results_path, index),
            results_key: self.results_key.clone(),
        })
    }

    /// Evaluate a whole population in parallel, one worker evaluator per
    /// candidate index. Results come back in candidate order.
    pub fn evaluate_population(
        &self,
        population: &[Chromosome],
    ) -> Result<Vec<ClusteringMetrics>> {
        population
            .par_iter()
            .enumerate()
            .map(|(i, chromosome)| self.for_worker(i)?.evaluate(chromosome))
            .collect()
    }
}

fn worker_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("worker");
    let name = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{stem}.worker{index}.{ext}"),
        None => format!("{stem}.worker{index}"),
    };
    path.with_file_name(name)
}
