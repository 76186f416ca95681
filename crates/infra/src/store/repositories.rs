//! Store-backed implementations of the core repository ports

use async_trait::async_trait;
use autocrm_core::{NoteRepository, ProfileRepository, TicketRepository};
use autocrm_domain::constants::{NOTES_TABLE, PROFILES_TABLE, TICKETS_TABLE};
use autocrm_domain::{
    AutoCrmError, NewNote, NewTicket, Note, Priority, Profile, Result, Ticket, TicketId,
    TicketPatch, TicketStatus, VisibilityFilter,
};
use serde::Serialize;
use tracing::{debug, info};

use super::query::{Direction, Query};
use super::rest::RestStore;

/// Insert payload for the tickets table
#[derive(Debug, Serialize)]
struct TicketRow<'a> {
    title: &'a str,
    description: &'a str,
    priority: Priority,
    status: TicketStatus,
    user_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct RestTicketRepository {
    store: RestStore,
}

impl RestTicketRepository {
    pub fn new(store: RestStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TicketRepository for RestTicketRepository {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let query = Query::select().order("created_at", Direction::Desc);
        let tickets: Vec<Ticket> = self.store.select(TICKETS_TABLE, &query).await?;
        debug!(count = tickets.len(), "fetched tickets");
        Ok(tickets)
    }

    async fn get_ticket(&self, id: &TicketId) -> Result<Option<Ticket>> {
        let query = Query::select().eq("id", id).limit(1);
        let rows: Vec<Ticket> = self.store.select(TICKETS_TABLE, &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn create_ticket(&self, ticket: &NewTicket, owner: &str) -> Result<Ticket> {
        let row = TicketRow {
            title: &ticket.title,
            description: &ticket.description,
            priority: ticket.priority,
            status: TicketStatus::New,
            user_id: owner,
        };
        let created: Ticket = self.store.insert(TICKETS_TABLE, &row).await?;
        info!(ticket_id = %created.id, "ticket row inserted");
        Ok(created)
    }

    async fn update_ticket(&self, id: &TicketId, patch: &TicketPatch) -> Result<()> {
        let query = Query::filter().eq("id", id);
        let updated: Vec<serde_json::Value> = self.store.update(TICKETS_TABLE, &query, patch).await?;
        if updated.is_empty() {
            return Err(AutoCrmError::NotFound(format!("ticket {id}")));
        }
        debug!(ticket_id = %id, "ticket row updated");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RestNoteRepository {
    store: RestStore,
}

impl RestNoteRepository {
    pub fn new(store: RestStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NoteRepository for RestNoteRepository {
    async fn list_notes(&self, ticket_id: &TicketId, filter: VisibilityFilter) -> Result<Vec<Note>> {
        let mut query = Query::select().eq("ticket_id", ticket_id);
        if let Some(visibility) = filter.visibility() {
            query = query.eq("visibility", visibility);
        }
        let query = query.order("created_at", Direction::Desc);
        self.store.select(NOTES_TABLE, &query).await
    }

    async fn insert_note(&self, note: &NewNote) -> Result<Note> {
        self.store.insert(NOTES_TABLE, note).await
    }
}

#[derive(Debug, Clone)]
pub struct RestProfileRepository {
    store: RestStore,
}

impl RestProfileRepository {
    pub fn new(store: RestStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        let query = Query::select().eq("user_id", user_id).limit(1);
        let rows: Vec<Profile> = self.store.select(PROFILES_TABLE, &query).await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use autocrm_domain::{StoreConfig, Visibility};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::HttpClient;
    use crate::store::AnonymousAccess;

    fn store(server: &MockServer) -> RestStore {
        let config =
            StoreConfig { url: server.uri(), anon_key: "anon".into(), timeout_secs: None };
        RestStore::new(&config, HttpClient::new().unwrap(), Arc::new(AnonymousAccess)).unwrap()
    }

    fn ticket_row(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Broken laptop",
            "description": "Screen flickers",
            "status": status,
            "priority": "high",
            "user_id": "cust-1",
            "created_at": "2024-03-05T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn lists_tickets_newest_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tickets"))
            .and(query_param("order", "created_at.desc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([ticket_row("t-2", "new"), ticket_row("t-1", "closed")])),
            )
            .mount(&server)
            .await;

        let tickets = RestTicketRepository::new(store(&server)).list_tickets().await.unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[1].status, TicketStatus::Closed);
    }

    #[tokio::test]
    async fn unknown_status_is_a_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_row("t-1", "archived")])))
            .mount(&server)
            .await;

        let err = RestTicketRepository::new(store(&server)).list_tickets().await.unwrap_err();
        assert!(matches!(err, AutoCrmError::Persistence(_)));
    }

    #[tokio::test]
    async fn create_inserts_new_ticket_for_owner() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/tickets"))
            .and(body_json(json!({
                "title": "Broken laptop",
                "description": "Screen flickers",
                "priority": "high",
                "status": "new",
                "user_id": "cust-1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([ticket_row("t-9", "new")])))
            .expect(1)
            .mount(&server)
            .await;

        let ticket = NewTicket::new("Broken laptop", "Screen flickers", Priority::High);
        let created =
            RestTicketRepository::new(store(&server)).create_ticket(&ticket, "cust-1").await.unwrap();
        assert_eq!(created.id.as_str(), "t-9");
    }

    #[tokio::test]
    async fn update_sends_only_patch_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/tickets"))
            .and(query_param("id", "eq.t-1"))
            .and(body_json(json!({ "status": "resolved" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_row("t-1", "resolved")])))
            .expect(1)
            .mount(&server)
            .await;

        RestTicketRepository::new(store(&server))
            .update_ticket(&TicketId::new("t-1"), &TicketPatch::status(TicketStatus::Resolved))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_matching_no_row_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = RestTicketRepository::new(store(&server))
            .update_ticket(&TicketId::new("missing"), &TicketPatch::priority(Priority::Low))
            .await
            .unwrap_err();
        assert!(matches!(err, AutoCrmError::NotFound(_)));
    }

    #[tokio::test]
    async fn public_filter_pins_visibility() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/ticket_notes"))
            .and(query_param("ticket_id", "eq.t-1"))
            .and(query_param("visibility", "eq.public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "n-1",
                "ticket_id": "t-1",
                "note": "We shipped a replacement",
                "visibility": "public",
                "created_by": "staff-1",
                "created_at": "2024-03-05T11:00:00Z"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let notes = RestNoteRepository::new(store(&server))
            .list_notes(&TicketId::new("t-1"), VisibilityFilter::Public)
            .await
            .unwrap();
        assert_eq!(notes[0].visibility, Visibility::Public);
        assert_eq!(notes[0].body, "We shipped a replacement");
    }

    #[tokio::test]
    async fn missing_profile_row_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .and(query_param("user_id", "eq.u-404"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let profile = RestProfileRepository::new(store(&server)).get_profile("u-404").await.unwrap();
        assert!(profile.is_none());
    }
}
