//! Error types for the psp command line

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for psp runs
#[derive(Error, Debug)]
pub enum CliError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::PspConfig`]
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Writing the report failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
