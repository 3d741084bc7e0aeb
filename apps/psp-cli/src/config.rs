//! Configuration for psp runs
//!
//! Settings come from an optional TOML file and are then overridden by
//! command line flags. Every field has a default, so an empty file (or no
//! file at all) reproduces the classic `test0001.txt` behaviour.
//!
//! ```toml
//! [input]
//! dir = "data"
//! prefix = "test"
//! width = 4
//! extension = "txt"
//! first_index = 1
//!
//! [output]
//! precision = 6
//! label_width = 26
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use psp_io::NumberedPattern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PspConfig {
    /// Where input files are found
    pub input: InputConfig,
    /// How reports are printed
    pub output: OutputConfig,
}

/// Numbered input discovery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory searched for numbered files
    pub dir: PathBuf,
    /// File name prefix, `test` in `test0001.txt`
    pub prefix: String,
    /// Zero-padded width of the index
    pub width: usize,
    /// File extension without the dot
    pub extension: String,
    /// First index probed
    pub first_index: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        let pattern = NumberedPattern::default();
        Self {
            dir: pattern.dir,
            prefix: pattern.prefix,
            width: pattern.width,
            extension: pattern.extension,
            first_index: 1,
        }
    }
}

impl InputConfig {
    pub fn pattern(&self) -> NumberedPattern {
        NumberedPattern {
            dir: self.dir.clone(),
            prefix: self.prefix.clone(),
            width: self.width,
            extension: self.extension.clone(),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled lines, `[0001] mean:  5.000000`
    #[default]
    Text,
    /// One JSON object per input file
    Json,
}

/// Report formatting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Digits after the decimal point
    pub precision: usize,
    /// Width of the `label:` column
    pub label_width: usize,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            label_width: 26,
            format: OutputFormat::Text,
        }
    }
}

impl PspConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.width == 0 || self.input.width > 9 {
            return Err(ConfigError::OutOfRange(
                "input.width must be between 1 and 9".to_string(),
            ));
        }

        if self.input.extension.is_empty() {
            return Err(ConfigError::MissingField("input.extension".to_string()));
        }

        if self.output.label_width == 0 {
            return Err(ConfigError::OutOfRange(
                "output.label_width must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Required field is empty
    #[error("Missing field: {0}")]
    MissingField(String),
}
