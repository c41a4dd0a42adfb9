//! Greedy two-pointer assignment of customers to agents.

use super::types::{AssignmentRecord, Customer, EntityId};

/// Sort `customers` ascending by score in place, then hand each one to the
/// first record (in ascending score order) able to serve it.
///
/// `records` must already be sorted ascending by score. An agent whose score
/// is below the current customer's can serve no later customer either, so the
/// agent pointer only moves forward and the pass is linear in
/// `customers.len() + records.len()`.
///
/// Returns the ids of customers no agent could serve, in ascending score order.
pub fn assign_customers(
    customers: &mut [Customer],
    records: &mut [AssignmentRecord],
) -> Vec<EntityId> {
    customers.sort_by(|a, b| a.score_value().total_cmp(&b.score_value()));

    let mut unassigned = Vec::new();
    let mut current = 0;

    for customer in customers.iter() {
        let score = customer.score_value();
        while current < records.len() && score > records[current].score {
            current += 1;
        }

        match records.get_mut(current) {
            Some(record) => record.customers.push(customer.id_value()),
            None => unassigned.push(customer.id_value()),
        }
    }

    unassigned
}
