use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a [`NutrientDatabase`](crate::nutrient_db::NutrientDatabase)
/// from an external table.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Nutrient table not found at: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read nutrient table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found")]
    MissingColumn(&'static str),

    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("No valid nutrient rows loaded from {0:?}")]
    Empty(PathBuf),
}

/// Failures while loading or validating a nutrition policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read policy file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse policy file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid policy value: {0} must be a positive finite number")]
    InvalidCap(&'static str),

    #[error("Invalid environment value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Failures of the LLM-backed estimator. Every variant is recoverable by
/// falling back to the deterministic engine.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("LLM API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed LLM response: {0}")]
    Malformed(String),

    #[error("Implausible LLM estimate: {0}")]
    Implausible(String),
}
