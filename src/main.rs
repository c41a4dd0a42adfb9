//! csb: customer success balancing.
//!
//! This is the main entry point for the `csb` CLI. It parses arguments,
//! resolves config and logging, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

use csb::cli::Cli;
use csb::config::Config;
use csb::error::Result;
use csb::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    let env_filter = std::env::var(logging::LOG_ENV).ok();
    let directive = logging::resolve_filter(cli.verbose, env_filter.as_deref(), &config.log_filter);
    logging::setup_logging(&directive)?;

    commands::dispatch(cli.command, &config)
}
