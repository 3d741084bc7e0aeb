//! psp - statistics over numbered test files

use clap::Parser;

use psp_cli::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    psp_cli::init_logging(cli.verbose);

    let written = psp_cli::run_cli(&cli)?;
    tracing::debug!(written, "finished");
    Ok(())
}
