//! Implementation of the `csb init` command.
//!
//! Writes a config file populated with every default so users can edit it
//! in place.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{CsbError, Result};
use crate::fs::atomic_write_file;
use tracing::info;

/// Execute the `csb init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let output = run_init(&args)?;
    print!("{}", output);
    Ok(())
}

fn run_init(args: &InitArgs) -> Result<String> {
    if args.path.exists() && !args.force {
        return Err(CsbError::UserError(format!(
            "refusing to overwrite existing config '{}'.\n\n\
             To replace it with defaults, run:\n  csb init --path {} --force",
            args.path.display(),
            args.path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(&args.path, &yaml)?;

    info!(path = %args.path.display(), "wrote default config");
    Ok(format!("Wrote default config to {}\n", args.path.display()))
}
