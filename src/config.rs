use crate::error::{Result, TuneError};
use crate::genetics::CrossoverPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tuner settings loaded from a TOML file by the CLI; the library types take
/// these as explicit arguments instead of reading global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TunerConfig {
    /// Benchmark executable; invoked as `<benchmark_command> <config_path>`.
    pub benchmark_command: PathBuf,
    /// The benchmark's own key/value configuration file.
    pub config_path: PathBuf,
    /// Result file the benchmark writes its eleven metrics into.
    pub results_path: PathBuf,
    /// Configuration key naming the result path, when the benchmark reads
    /// it from its configuration.
    pub results_key: Option<String>,
    /// RNG seed for the tuning driver's `StdRng`; omit for entropy seeding.
    /// Validated here, consumed by the driver that owns the generation loop.
    pub seed: Option<u64>,
    /// Recombination policy the tuning driver hands to `crossover`.
    pub crossover_policy: CrossoverPolicy,
    /// Per-bit flip probability for the tuning driver's mutation policy.
    pub mutation_probability: f64,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            benchmark_command: PathBuf::from("./algoBenchmark"),
            config_path: PathBuf::from("config/clusteringConfig.md"),
            results_path: PathBuf::from("output/score.txt"),
            results_key: Some("scoreOutputPath".to_string()),
            seed: None,
            crossover_policy: CrossoverPolicy::FixedSinglePoint,
            mutation_probability: 0.002,
        }
    }
}

impl TunerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TuneError::Configuration(format!("Failed to read config: {}", e)))?;
        let config: TunerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| TuneError::Configuration(format!("Failed to serialize: {}", e)))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.benchmark_command.as_os_str().is_empty() {
            return Err(TuneError::Configuration(
                "Benchmark command must not be empty".to_string(),
            ));
        }
        if self.config_path.as_os_str().is_empty() || self.results_path.as_os_str().is_empty() {
            return Err(TuneError::Configuration(
                "Config and result paths must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(TuneError::Configuration(
                "Mutation probability must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
