//! End-to-end balancing scenarios.

use super::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Entities with ids `1..=n` and the given scores.
fn entities(scores: &[f64]) -> Vec<Entity> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| Entity::new(i as EntityId + 1, score))
        .collect()
}

/// `size` entities with ids `1..=size`, all with the same score.
fn uniform(size: usize, score: f64) -> Vec<Entity> {
    (1..=size as EntityId).map(|id| Entity::new(id, score)).collect()
}

fn run(agents: &[Agent], customers: &mut [Customer], away: &[EntityId]) -> EntityId {
    compute_top_agent(Some(agents), Some(customers), Some(away)).unwrap()
}

const SHARED_CUSTOMERS: [f64; 10] = [10.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 20.0, 60.0];

#[test]
fn test_mixed_scores_with_two_away() {
    let agents = vec![
        Entity::new(1, 60.0),
        Entity::new(2, 20.0),
        Entity::new(3, 95.0),
        Entity::new(4, 75.0),
    ];
    let mut customers = vec![
        Entity::new(1, 90.0),
        Entity::new(2, 20.0),
        Entity::new(3, 70.0),
        Entity::new(4, 40.0),
        Entity::new(5, 60.0),
        Entity::new(6, 10.0),
    ];

    assert_eq!(run(&agents, &mut customers, &[2, 4]), 1);
}

#[test]
fn test_three_way_tie() {
    let agents = entities(&[11.0, 21.0, 31.0, 3.0, 4.0, 5.0]);
    let mut customers = entities(&SHARED_CUSTOMERS);

    assert_eq!(run(&agents, &mut customers, &[]), NO_TOP_AGENT);
}

#[test]
fn test_large_roster_within_time_budget() {
    let start = Instant::now();

    let agents = entities(&(1..=999u32).map(f64::from).collect::<Vec<_>>());
    let mut customers = uniform(10_000, 998.0);

    assert_eq!(run(&agents, &mut customers, &[999]), 998);

    // Generous bound so unoptimized test builds still pass.
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_no_agent_can_serve_anyone() {
    let agents = entities(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let mut customers = entities(&SHARED_CUSTOMERS);

    let result = balance(Some(&agents), Some(&mut customers), Some(&[])).unwrap();
    assert_eq!(result.top_agent, NO_TOP_AGENT);
    assert_eq!(result.unassigned.len(), 10);
    assert_eq!(result.assigned_count(), 0);
}

#[test]
fn test_single_strong_agent_takes_everyone() {
    let agents = entities(&[100.0, 2.0, 3.0, 6.0, 4.0, 5.0]);
    let mut customers = entities(&SHARED_CUSTOMERS);

    assert_eq!(run(&agents, &mut customers, &[]), 1);
}

#[test]
fn test_strong_agents_away() {
    let agents = entities(&[100.0, 99.0, 88.0, 3.0, 4.0, 5.0]);
    let mut customers = entities(&SHARED_CUSTOMERS);

    assert_eq!(run(&agents, &mut customers, &[1, 3, 2]), NO_TOP_AGENT);
}

#[test]
fn test_weak_agents_away() {
    let agents = entities(&[100.0, 99.0, 88.0, 3.0, 4.0, 5.0]);
    let mut customers = entities(&SHARED_CUSTOMERS);

    assert_eq!(run(&agents, &mut customers, &[4, 5, 6]), 3);
}

#[test]
fn test_unsorted_customers() {
    let agents = entities(&[60.0, 40.0, 95.0, 75.0]);
    let mut customers = entities(&[90.0, 70.0, 20.0, 40.0, 60.0, 10.0]);

    assert_eq!(run(&agents, &mut customers, &[2, 4]), 1);
}

#[test]
fn test_missing_away_ids() {
    let agents = vec![Entity::new(1, 60.0), Entity::new(2, 20.0)];
    let mut customers = vec![Entity::new(1, 90.0), Entity::new(2, 20.0)];

    let err = compute_top_agent(Some(&agents), Some(&mut customers), None).unwrap_err();
    assert_eq!(err, BalanceError::MissingArguments);
}

#[test]
fn test_agent_without_score() {
    let agents = vec![
        Entity {
            id: Some(1),
            score: None,
        },
        Entity {
            id: Some(2),
            score: None,
        },
    ];
    let mut customers = vec![Entity::new(1, 90.0), Entity::new(2, 20.0)];

    let err = compute_top_agent(Some(&agents), Some(&mut customers), Some(&[2, 4])).unwrap_err();
    assert_eq!(err, BalanceError::InvalidAgent { index: 0 });
}

#[test]
fn test_customer_without_id() {
    let agents = vec![Entity::new(1, 60.0), Entity::new(2, 20.0)];
    let mut customers = vec![
        Entity {
            id: None,
            score: Some(90.0),
        },
        Entity {
            id: None,
            score: Some(20.0),
        },
    ];

    let err = compute_top_agent(Some(&agents), Some(&mut customers), Some(&[2, 4])).unwrap_err();
    assert_eq!(err, BalanceError::InvalidCustomer { index: 0 });
}

#[test]
fn test_failed_validation_leaves_customers_untouched() {
    let agents = vec![Entity::new(1, 0.0)];
    let mut customers = entities(&[30.0, 10.0, 20.0]);
    let before = customers.clone();

    assert!(compute_top_agent(Some(&agents), Some(&mut customers), Some(&[])).is_err());
    assert_eq!(customers, before);
}

#[test]
fn test_repeat_call_gives_same_result() {
    let agents = entities(&[60.0, 40.0, 95.0, 75.0]);
    let mut customers = entities(&[90.0, 70.0, 20.0, 40.0, 60.0, 10.0]);
    let original_order = customers.clone();

    let first = run(&agents, &mut customers, &[2, 4]);
    assert_ne!(customers, original_order);

    let second = run(&agents, &mut customers, &[2, 4]);
    assert_eq!(first, second);
}

#[test]
fn test_empty_inputs() {
    let mut customers = entities(&[10.0]);
    assert_eq!(run(&[], &mut customers, &[]), NO_TOP_AGENT);

    let agents = entities(&[10.0, 20.0]);
    assert_eq!(run(&agents, &mut [], &[]), NO_TOP_AGENT);
}

#[test]
fn test_everyone_away() {
    let agents = entities(&[10.0, 20.0]);
    let mut customers = entities(&[5.0, 15.0]);

    let result = balance(Some(&agents), Some(&mut customers), Some(&[1, 2])).unwrap();
    assert!(result.assignments.is_empty());
    assert_eq!(result.unassigned, vec![1, 2]);
    assert_eq!(result.top_agent(), None);
}

#[test]
fn test_assignment_properties_hold() {
    let agents = entities(&[35.0, 12.0, 80.0, 55.0, 12.0, 99.0, 41.0]);
    let agent_scores: HashMap<EntityId, f64> =
        agents.iter().map(|a| (a.id_value(), a.score_value())).collect();
    let away = [3, 6];

    let mut customers = entities(&[
        5.0, 90.0, 12.0, 13.0, 40.0, 41.0, 42.0, 55.0, 56.0, 81.0, 100.0, 1.0, 35.0, 36.0,
    ]);
    let customer_scores: HashMap<EntityId, f64> = customers
        .iter()
        .map(|c| (c.id_value(), c.score_value()))
        .collect();
    let total = customers.len();

    let result = balance(Some(&agents), Some(&mut customers), Some(&away)).unwrap();

    // Every customer is placed at most once.
    let mut seen = Vec::new();
    for record in &result.assignments {
        assert!(!away.contains(&record.id));
        for customer in &record.customers {
            assert!(customer_scores[customer] <= agent_scores[&record.id]);
            seen.push(*customer);
        }
    }
    seen.extend(&result.unassigned);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);

    // A nonzero result strictly exceeds every other load.
    if let Some(top) = result.top_agent() {
        let top_load = result.record(top).unwrap().load();
        for record in result.assignments.iter().filter(|r| r.id != top) {
            assert!(record.load() < top_load);
        }
    }
}

#[test]
fn test_balance_reports_assignments() {
    let agents = entities(&[60.0, 20.0, 95.0, 75.0]);
    let mut customers = entities(&[90.0, 20.0, 70.0, 40.0, 60.0, 10.0]);

    let result = balance(Some(&agents), Some(&mut customers), Some(&[2, 4])).unwrap();

    assert_eq!(result.top_agent, 1);
    assert_eq!(result.record(1).unwrap().customers, vec![6, 2, 4, 5]);
    assert_eq!(result.record(3).unwrap().customers, vec![3, 1]);
    assert!(result.record(2).is_none());
    assert!(result.unassigned.is_empty());
}
