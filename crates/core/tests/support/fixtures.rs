//! Viewer and ticket builders

use autocrm_core::Viewer;
use autocrm_domain::{AuthUser, Priority, Profile, Role, Session, Ticket, TicketId, TicketStatus};
use chrono::{DateTime, Utc};

pub fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("token-{user_id}"),
        refresh_token: None,
        expires_at: None,
        user: AuthUser { id: user_id.into(), email: Some(format!("{user_id}@example.com")) },
    }
}

pub fn staff_viewer() -> Viewer {
    let session = session("staff-1");
    let profile = Profile {
        user_id: "staff-1".into(),
        name: Some("Sam Staff".into()),
        email: "staff-1@example.com".into(),
        role: Role::Employee,
    };
    Viewer::new(session, profile)
}

pub fn customer_viewer() -> Viewer {
    Viewer::new(session("cust-1"), Profile::customer("cust-1", "cust-1@example.com"))
}

pub fn ticket(id: &str, status: TicketStatus, priority: Priority, created_at: DateTime<Utc>) -> Ticket {
    Ticket {
        id: TicketId::new(id),
        title: format!("Ticket {id}"),
        description: "Something is broken".into(),
        status,
        priority,
        user_id: "cust-1".into(),
        created_at,
    }
}
