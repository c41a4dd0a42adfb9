//! Filtering out away agents and ordering the rest by capability.

use super::types::{Agent, AssignmentRecord, EntityId};
use std::collections::HashSet;

/// Build one empty [`AssignmentRecord`] per agent not in `away_agent_ids`,
/// sorted ascending by score.
///
/// The sort is stable, so agents with equal scores keep their input order.
/// `agents` is left untouched.
pub fn available_agents(agents: &[Agent], away_agent_ids: &[EntityId]) -> Vec<AssignmentRecord> {
    let away: HashSet<EntityId> = away_agent_ids.iter().copied().collect();

    let mut records: Vec<AssignmentRecord> = agents
        .iter()
        .filter(|agent| !away.contains(&agent.id_value()))
        .map(AssignmentRecord::for_agent)
        .collect();

    records.sort_by(|a, b| a.score.total_cmp(&b.score));
    records
}
