//! Finding the uniquely busiest agent.

use super::types::{AssignmentRecord, EntityId, NO_TOP_AGENT};

/// Id of the agent holding strictly more customers than every other record,
/// or [`NO_TOP_AGENT`] when the maximum is shared.
///
/// All-zero loads tie at zero, and an empty slice has no maximum; both give
/// [`NO_TOP_AGENT`]. A later strictly greater load clears an earlier tie.
pub fn busiest_agent(records: &[AssignmentRecord]) -> EntityId {
    let mut max_load = 0;
    let mut owner = NO_TOP_AGENT;
    let mut unique = false;

    for record in records {
        let load = record.load();
        if load > max_load {
            max_load = load;
            owner = record.id;
            unique = true;
        } else if load == max_load {
            unique = false;
        }
    }

    if unique { owner } else { NO_TOP_AGENT }
}
