//! Rendering of balancing results.
//!
//! Text output starts with the busiest agent's id on its own line (`0` when
//! there is none) so scripts can read the first line; the assignment listing
//! follows only when requested.

use crate::balance::{AssignmentRecord, Balance, EntityId};
use crate::error::{CsbError, Result};

/// Render a balance as text.
pub fn render_text(balance: &Balance, show_assignments: bool) -> String {
    let mut out = format!("{}\n", balance.top_agent);

    if !show_assignments {
        return out;
    }

    out.push('\n');
    if balance.assignments.is_empty() {
        out.push_str("Assignments: no available agents\n");
    } else {
        out.push_str("Assignments:\n");
        for record in &balance.assignments {
            out.push_str(&format_record(record));
            out.push('\n');
        }
    }

    out.push_str(&format!("Unassigned:  {}\n", format_ids(&balance.unassigned)));
    out
}

/// Render a balance as a pretty-printed JSON document.
pub fn render_json(balance: &Balance) -> Result<String> {
    serde_json::to_string_pretty(balance)
        .map_err(|e| CsbError::UserError(format!("failed to serialize result to JSON: {}", e)))
}

fn format_record(record: &AssignmentRecord) -> String {
    format!(
        "  agent {:>4} (score {:>6}): {:>3} customer(s) {}",
        record.id,
        record.score,
        record.load(),
        format_ids(&record.customers)
    )
}

fn format_ids(ids: &[EntityId]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("[{}]", joined.join(", "))
}
