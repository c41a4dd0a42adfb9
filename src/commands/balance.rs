//! Implementation of the `csb balance` command.
//!
//! Loads a roster, assigns customers to agents, and prints the busiest
//! agent's id (or the full assignment on request).

use super::{load_roster, record_event};
use crate::cli::BalanceArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::report::{render_json, render_text};
use serde_json::json;
use tracing::info;

/// Execute the `csb balance` command.
pub fn cmd_balance(args: BalanceArgs, config: &Config) -> Result<()> {
    let output = run_balance(&args, config)?;
    print!("{}", output);
    Ok(())
}

/// Run balancing and return the rendered output.
fn run_balance(args: &BalanceArgs, config: &Config) -> Result<String> {
    let mut roster = load_roster(&args.roster, args.away.clone())?;
    let result = roster.balance()?;

    info!(
        roster = %args.roster.display(),
        top_agent = result.top_agent,
        assigned = result.assigned_count(),
        unassigned = result.unassigned.len(),
        "balanced roster"
    );

    let event = Event::new(EventAction::Balance, args.roster.display().to_string()).with_details(
        json!({
            "top_agent": result.top_agent,
            "available_agents": result.assignments.len(),
            "assigned": result.assigned_count(),
            "unassigned": result.unassigned.len(),
        }),
    );
    record_event(config, event);

    match args.format.unwrap_or(config.output) {
        OutputFormat::Text => Ok(render_text(
            &result,
            args.assignments || config.show_assignments,
        )),
        OutputFormat::Json => Ok(format!("{}\n", render_json(&result)?)),
    }
}
