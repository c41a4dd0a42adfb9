//! Roster file model for csb.
//!
//! A roster holds the three balancing inputs for one run. It is read from
//! YAML or JSON:
//!
//! ```text
//! agents:
//!   - { id: 1, score: 60 }
//!   - { id: 2, score: 20 }
//! customers:
//!   - { id: 1, score: 90 }
//!   - { id: 2, score: 20 }
//! away: [2]
//! ```
//!
//! Every key is optional at parse time. An omitted key stays `None` so that
//! balancing can report it as a missing argument; unknown keys are ignored.

use crate::balance::{self, Agent, Balance, BalanceError, Customer, EntityId};
use serde::{Deserialize, Serialize};

mod io;

/// The inputs of one balancing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Customer success agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<Agent>>,

    /// Customers to distribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<Customer>>,

    /// Ids of agents that are currently unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<Vec<EntityId>>,
}

impl Roster {
    /// Replace the away list, e.g. from a command-line override.
    pub fn with_away(mut self, away: Vec<EntityId>) -> Self {
        self.away = Some(away);
        self
    }

    /// Validate the roster without assigning anything.
    pub fn validate(&self) -> Result<(), BalanceError> {
        let (agents, customers, _) = balance::require_inputs(
            self.agents.as_deref(),
            self.customers.as_deref(),
            self.away.as_deref(),
        )?;
        balance::validate_entities(agents, customers)
    }

    /// Number of agents not listed as away.
    pub fn available_count(&self) -> usize {
        let away = self.away.as_deref().unwrap_or_default();
        self.agents
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|agent| !away.contains(&agent.id_value()))
            .count()
    }

    /// Run balancing over this roster.
    ///
    /// The customer list is left sorted ascending by score.
    pub fn balance(&mut self) -> Result<Balance, BalanceError> {
        balance::balance(
            self.agents.as_deref(),
            self.customers.as_deref_mut(),
            self.away.as_deref(),
        )
    }
}
