//! Entity and assignment types used by the balancing routine.

use serde::{Deserialize, Serialize};

/// Identifier of an agent or customer. Zero is never a valid id.
pub type EntityId = u64;

/// Returned in place of an agent id when no single agent is the busiest.
pub const NO_TOP_AGENT: EntityId = 0;

/// A scored participant as it arrives from the caller.
///
/// Both fields are optional so input files can omit them; validation
/// rejects entries whose id or score is missing or zero before any
/// assignment work happens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// A customer success agent; `score` is its handling capability.
pub type Agent = Entity;

/// A customer; `score` is the service level it requires.
pub type Customer = Entity;

impl Entity {
    /// Create a fully populated entity.
    pub fn new(id: EntityId, score: f64) -> Self {
        Self {
            id: Some(id),
            score: Some(score),
        }
    }

    /// Whether both fields are present and truthy.
    ///
    /// Zero counts as missing for both fields, and a NaN score is
    /// treated the same way.
    pub fn is_complete(&self) -> bool {
        let id_ok = self.id.is_some_and(|id| id != 0);
        let score_ok = self.score.is_some_and(|s| s != 0.0 && !s.is_nan());
        id_ok && score_ok
    }

    /// The id, or zero when absent. Only meaningful after validation.
    pub fn id_value(&self) -> EntityId {
        self.id.unwrap_or(0)
    }

    /// The score, or zero when absent. Only meaningful after validation.
    pub fn score_value(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// An available agent together with the customers assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: EntityId,
    pub score: f64,
    /// Customer ids in the order they were assigned.
    pub customers: Vec<EntityId>,
}

impl AssignmentRecord {
    /// Start an empty record for a validated agent.
    pub fn for_agent(agent: &Agent) -> Self {
        Self {
            id: agent.id_value(),
            score: agent.score_value(),
            customers: Vec::new(),
        }
    }

    /// Number of customers assigned so far.
    pub fn load(&self) -> usize {
        self.customers.len()
    }
}

/// Full outcome of one balancing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Id of the uniquely busiest agent, or [`NO_TOP_AGENT`].
    pub top_agent: EntityId,

    /// One record per available agent, ascending by score.
    pub assignments: Vec<AssignmentRecord>,

    /// Customers no available agent could serve, ascending by score.
    pub unassigned: Vec<EntityId>,
}

impl Balance {
    /// The busiest agent, if exactly one agent holds the maximum load.
    pub fn top_agent(&self) -> Option<EntityId> {
        (self.top_agent != NO_TOP_AGENT).then_some(self.top_agent)
    }

    /// Total number of customers placed with an agent.
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().map(AssignmentRecord::load).sum()
    }

    /// Find the record for an agent by id.
    pub fn record(&self, agent_id: EntityId) -> Option<&AssignmentRecord> {
        self.assignments.iter().find(|r| r.id == agent_id)
    }
}
