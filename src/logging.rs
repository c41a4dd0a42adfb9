//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing` so stdout only carries results.
//! The filter comes from `--verbose`, then `CSB_LOG`, then the config's
//! `log_filter`.

use crate::error::{CsbError, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CSB_LOG";

/// Filter used when `--verbose` is passed.
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive for this run.
pub fn resolve_filter(verbose: bool, env_value: Option<&str>, config_filter: &str) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }

    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => config_filter.to_string(),
    }
}

/// Build an [`EnvFilter`] from a directive, rejecting malformed ones.
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| {
        CsbError::UserError(format!("invalid log filter '{}': {}", directive, e))
    })
}

/// Install the global stderr subscriber.
///
/// Only the first call in a process installs anything; later calls are no-ops.
pub fn setup_logging(directive: &str) -> Result<()> {
    let filter = build_filter(directive)?;

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    Ok(())
}
