use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuneError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error for key '{key}': cannot parse value '{value}'")]
    Parse { key: String, value: String },

    #[error("Benchmark error: {0}")]
    Benchmark(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TuneError>;
