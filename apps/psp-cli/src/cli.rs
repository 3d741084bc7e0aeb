//! Command line definitions

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{OutputFormat, PspConfig};
use crate::driver::Program;
use crate::error::CliResult;

/// Statistics over numbered test files
#[derive(Debug, Parser)]
#[command(name = "psp", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mean and sample standard deviation
    Mean(InputArgs),
    /// Log-normal size ranges (very small .. very large)
    Range(InputArgs),
    /// Linear regression, correlation and estimate
    Regress(InputArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files; when omitted, numbered files are probed
    pub files: Vec<PathBuf>,
}

/// Flags that override config file values
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Directory searched for numbered inputs
    #[arg(short = 'C', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Numbered input file prefix
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Zero-padded index width
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// Numbered input extension
    #[arg(long, global = true)]
    pub extension: Option<String>,

    /// First index probed
    #[arg(long, global = true)]
    pub first: Option<usize>,

    /// Digits after the decimal point
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

impl Overrides {
    pub fn apply(&self, config: &mut PspConfig) {
        if let Some(dir) = &self.dir {
            config.input.dir = dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.input.prefix = prefix.clone();
        }
        if let Some(width) = self.width {
            config.input.width = width;
        }
        if let Some(extension) = &self.extension {
            config.input.extension = extension.clone();
        }
        if let Some(first) = self.first {
            config.input.first_index = first;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

impl Command {
    pub fn program(&self) -> Program {
        match self {
            Command::Mean(_) => Program::Mean,
            Command::Range(_) => Program::Range,
            Command::Regress(_) => Program::Regress,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        match self {
            Command::Mean(args) | Command::Range(args) | Command::Regress(args) => &args.files,
        }
    }
}

impl Cli {
    /// Load the config file (if any), apply flag overrides and validate
    pub fn resolve_config(&self) -> CliResult<PspConfig> {
        let mut config = match &self.config {
            Some(path) => PspConfig::load(path)?,
            None => PspConfig::default(),
        };
        self.overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
