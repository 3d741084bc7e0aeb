//! psp-cli - Command line reports for psp
//!
//! Three programs share one binary:
//!
//! - `psp mean`: mean and sample standard deviation of scalar samples
//! - `psp range`: log-normal size ranges of scalar samples
//! - `psp regress`: linear regression over `(x, y)` pairs
//!
//! By default each program reads `test0001.txt`, `test0002.txt`, ... from
//! the working directory until a file is missing, printing one report
//! block per file.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod report;

pub use config::{OutputFormat, PspConfig};
pub use driver::{execute, run, Program};
pub use error::{CliError, CliResult};
pub use report::{Report, ReportWriter};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` flags.
pub fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the parsed command line against stdout
pub fn run_cli(cli: &cli::Cli) -> CliResult<usize> {
    let config = cli.resolve_config()?;
    let stdout = std::io::stdout();
    execute(
        cli.command.program(),
        &config,
        cli.command.files().to_vec(),
        stdout.lock(),
    )
}
