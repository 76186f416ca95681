//! Display ordering for ticket lists

use std::cmp::Ordering;

use autocrm_domain::{Priority, Ticket};

/// Sort rank; lower sorts first.
pub const fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 1,
        Priority::Medium => 2,
        Priority::Low => 3,
        Priority::Unrecognized => 4,
    }
}

pub fn compare_priority(a: &Ticket, b: &Ticket) -> Ordering {
    priority_rank(a.priority).cmp(&priority_rank(b.priority))
}

/// Stable in-place sort, so equal priorities keep the store's order.
pub fn sort_by_priority(tickets: &mut [Ticket]) {
    tickets.sort_by_key(|ticket| priority_rank(ticket.priority));
}

pub fn sorted_by_priority(tickets: &[Ticket]) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    sort_by_priority(&mut sorted);
    sorted
}
