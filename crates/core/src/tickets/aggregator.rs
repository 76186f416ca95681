//! Dashboard counters

use autocrm_domain::{Ticket, TicketStats, TicketStatus};
use chrono::NaiveDate;

use crate::clock::Clock;

/// Count tickets for the dashboard header.
///
/// `resolved_today` counts resolved tickets whose `created_at` falls on
/// `today` (UTC calendar day).
pub fn aggregate(tickets: &[Ticket], today: NaiveDate) -> TicketStats {
    tickets.iter().fold(TicketStats::default(), |mut stats, ticket| {
        stats.total += 1;
        if ticket.status.is_open() {
            stats.open += 1;
        }
        if ticket.status == TicketStatus::Resolved && ticket.created_at.date_naive() == today {
            stats.resolved_today += 1;
        }
        stats
    })
}

pub fn aggregate_at(tickets: &[Ticket], clock: &dyn Clock) -> TicketStats {
    aggregate(tickets, clock.today())
}

#[cfg(test)]
mod tests {
    use autocrm_domain::{Priority, TicketId};
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;

    fn ticket(status: TicketStatus, created_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id: TicketId::new(format!("{status}-{created_at}")),
            title: "Printer jam".into(),
            description: "Tray 2".into(),
            status,
            priority: Priority::Medium,
            user_id: "u-1".into(),
            created_at,
        }
    }

    #[test]
    fn empty_set_is_all_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(aggregate(&[], today), TicketStats::default());
    }

    #[test]
    fn counts_open_and_resolved_today() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 15, 0, 0).unwrap();
        let tickets = vec![
            ticket(TicketStatus::New, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()),
            ticket(TicketStatus::Resolved, now),
            ticket(TicketStatus::InProgress, now),
        ];

        let stats = aggregate_at(&tickets, &FixedClock(now));
        assert_eq!(stats, TicketStats { total: 3, open: 2, resolved_today: 1 });
    }

    #[test]
    fn day_boundary_is_utc() {
        let late = Utc.with_ymd_and_hms(2024, 3, 4, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let tickets =
            vec![ticket(TicketStatus::Resolved, late), ticket(TicketStatus::Resolved, early)];

        let stats = aggregate(&tickets, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(stats.resolved_today, 1);
        assert_eq!(stats.open, 0);
    }

    #[test]
    fn closed_tickets_only_count_toward_total() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
        let stats = aggregate(&[ticket(TicketStatus::Closed, now)], now.date_naive());
        assert_eq!(stats, TicketStats { total: 1, open: 0, resolved_today: 0 });
    }
}
