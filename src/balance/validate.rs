//! Input validation for the balancing routine.
//!
//! Validation short-circuits: the first problem found is the one reported.

use super::BalanceError;
use super::types::{Agent, Customer, EntityId};

/// Unwrap the three inputs, failing if any of them is absent.
///
/// An empty list is present. Only `None` triggers
/// [`BalanceError::MissingArguments`].
pub fn require_inputs<'a, C>(
    agents: Option<&'a [Agent]>,
    customers: Option<C>,
    away_agent_ids: Option<&'a [EntityId]>,
) -> Result<(&'a [Agent], C, &'a [EntityId]), BalanceError> {
    match (agents, customers, away_agent_ids) {
        (Some(agents), Some(customers), Some(away)) => Ok((agents, customers, away)),
        _ => Err(BalanceError::MissingArguments),
    }
}

/// Check every agent, then every customer, for a truthy id and score.
pub fn validate_entities(agents: &[Agent], customers: &[Customer]) -> Result<(), BalanceError> {
    if let Some(index) = agents.iter().position(|a| !a.is_complete()) {
        return Err(BalanceError::InvalidAgent { index });
    }

    if let Some(index) = customers.iter().position(|c| !c.is_complete()) {
        return Err(BalanceError::InvalidCustomer { index });
    }

    Ok(())
}
