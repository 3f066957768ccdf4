//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`DeadReckoner::update_position_and_heading`](crate::DeadReckoner::update_position_and_heading).
///
/// All variants are precondition violations. The reckoner state is left
/// unchanged whenever one is returned.
#[derive(Debug, Error)]
pub enum ReckonerError {
    #[error("Insufficient samples: need {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors loading or validating a [`ReckonerConfig`](crate::ReckonerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ReckonerError>;
