//! Shared helpers for `autocrm-infra` integration tests.
//!
//! Spins up a mock hosted platform and builds an [`AppContext`] pointed at
//! it.

#![allow(dead_code)]

use autocrm_domain::{Config, LoggingConfig, RelayConfig, StoreConfig};
use autocrm_infra::AppContext;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ANON_KEY: &str = "anon-key";
pub const STAFF_TOKEN: &str = "staff-jwt";

pub fn config_for(server: &MockServer) -> Config {
    Config {
        store: StoreConfig { url: server.uri(), anon_key: ANON_KEY.into(), timeout_secs: Some(5) },
        relay: RelayConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn context_for(server: &MockServer) -> AppContext {
    AppContext::from_config(config_for(server)).expect("context should build")
}

pub fn ticket_row(id: &str, status: &str, priority: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Ticket {id}"),
        "description": "Details",
        "status": status,
        "priority": priority,
        "user_id": "cust-1",
        "created_at": created_at
    })
}

/// Mount a password grant for the staff user plus their employee profile.
pub async fn mount_staff_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": STAFF_TOKEN,
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "staff-1", "email": "sam@example.com" }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("user_id", "eq.staff-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "user_id": "staff-1",
            "name": "Sam",
            "email": "sam@example.com",
            "role": "employee"
        }])))
        .mount(server)
        .await;
}
