//! Command implementations for csb.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the roster loading and audit helpers they share.

mod balance;
mod check;
mod init;

use crate::balance::EntityId;
use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, append_event};
use crate::roster::Roster;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Balance(args) => balance::cmd_balance(args, config),
        Command::Check(args) => check::cmd_check(args, config),
        Command::Init(args) => init::cmd_init(args),
    }
}

/// Load a roster and apply a command-line away override, if any.
fn load_roster(path: &Path, away: Option<Vec<EntityId>>) -> Result<Roster> {
    let roster = Roster::load(path)?;
    Ok(match away {
        Some(away) => {
            debug!(?away, "overriding away agents");
            roster.with_away(away)
        }
        None => roster,
    })
}

/// Append an event to the configured audit log.
///
/// Best-effort: a failed write is reported on stderr but never fails the
/// command, since the balancing result is already computed.
fn record_event(config: &Config, event: Event) {
    let Some(audit_log) = config.audit_log.as_deref() else {
        return;
    };

    if let Err(e) = append_event(Path::new(audit_log), &event) {
        eprintln!("Warning: failed to record {} event: {}", event.action, e);
    }
}
