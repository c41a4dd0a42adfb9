//! Implementation of the `csb check` command.
//!
//! Validates a roster the same way `balance` does, without assigning.

use super::{load_roster, record_event};
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, EventAction};
use serde_json::json;
use tracing::info;

/// Execute the `csb check` command.
pub fn cmd_check(args: CheckArgs, config: &Config) -> Result<()> {
    let output = run_check(&args, config)?;
    print!("{}", output);
    Ok(())
}

/// Validate the roster and return a one-line summary.
fn run_check(args: &CheckArgs, config: &Config) -> Result<String> {
    let roster = load_roster(&args.roster, args.away.clone())?;
    roster.validate()?;

    let agents = roster.agents.as_ref().map_or(0, Vec::len);
    let customers = roster.customers.as_ref().map_or(0, Vec::len);
    let available = roster.available_count();

    info!(
        roster = %args.roster.display(),
        agents, available, customers, "roster is valid"
    );

    let event = Event::new(EventAction::Check, args.roster.display().to_string()).with_details(
        json!({
            "agents": agents,
            "available_agents": available,
            "customers": customers,
        }),
    );
    record_event(config, event);

    Ok(format!(
        "Roster OK: {} agent(s), {} available, {} customer(s)\n",
        agents, available, customers
    ))
}
