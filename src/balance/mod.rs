//! Customer success balancing.
//!
//! Assigns each customer to the least capable available agent that can still
//! serve it, then reports the agent left holding strictly the most customers.
//!
//! A run has four steps:
//! - Validation: all three inputs present, every entity has a truthy id and score
//! - Availability: drop away agents, sort the rest ascending by score
//! - Assignment: two-pointer merge of sorted customers into sorted agents
//! - Load scan: the uniquely busiest agent, or [`NO_TOP_AGENT`] on a tie
//!
//! The customer slice is sorted in place as part of the run.

pub mod assignment;
pub mod availability;
pub mod load;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;

pub use assignment::assign_customers;
pub use availability::available_agents;
pub use load::busiest_agent;
pub use types::{Agent, AssignmentRecord, Balance, Customer, Entity, EntityId, NO_TOP_AGENT};
pub use validate::{require_inputs, validate_entities};

use thiserror::Error;
use tracing::debug;

/// Reasons a balancing run is rejected before any assignment happens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceError {
    /// One of agents, customers, or away agent ids was not supplied.
    #[error("missing arguments: agents, customers and away agent ids are all required")]
    MissingArguments,

    /// An agent lacks a truthy id or score.
    #[error("invalid agent at position {index}: missing id or score")]
    InvalidAgent { index: usize },

    /// A customer lacks a truthy id or score.
    #[error("invalid customer at position {index}: missing id or score")]
    InvalidCustomer { index: usize },
}

/// Run the full balancing pass and return every assignment made.
///
/// `customers` is reordered ascending by score. Nothing is computed if
/// validation fails.
pub fn balance(
    agents: Option<&[Agent]>,
    customers: Option<&mut [Customer]>,
    away_agent_ids: Option<&[EntityId]>,
) -> Result<Balance, BalanceError> {
    let (agents, customers, away) = require_inputs(agents, customers, away_agent_ids)?;
    validate_entities(agents, customers)?;

    let mut assignments = available_agents(agents, away);
    debug!(
        agents = agents.len(),
        available = assignments.len(),
        customers = customers.len(),
        "balancing customers"
    );

    let unassigned = assign_customers(customers, &mut assignments);
    let top_agent = busiest_agent(&assignments);
    debug!(
        unassigned = unassigned.len(),
        top_agent, "assignment complete"
    );

    Ok(Balance {
        top_agent,
        assignments,
        unassigned,
    })
}

/// Id of the agent serving strictly the most customers, or [`NO_TOP_AGENT`]
/// when that maximum is shared.
///
/// ```
/// use csb::balance::{compute_top_agent, Entity};
///
/// let agents = [Entity::new(1, 60.0), Entity::new(2, 20.0), Entity::new(3, 95.0)];
/// let mut customers = [Entity::new(1, 90.0), Entity::new(2, 20.0), Entity::new(3, 10.0)];
/// let top = compute_top_agent(Some(&agents[..]), Some(&mut customers[..]), Some(&[2][..]))?;
/// assert_eq!(top, 1);
/// # Ok::<(), csb::balance::BalanceError>(())
/// ```
pub fn compute_top_agent(
    agents: Option<&[Agent]>,
    customers: Option<&mut [Customer]>,
    away_agent_ids: Option<&[EntityId]>,
) -> Result<EntityId, BalanceError> {
    balance(agents, customers, away_agent_ids).map(|b| b.top_agent)
}
