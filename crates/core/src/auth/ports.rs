//! Port interface for the hosted auth provider

use async_trait::async_trait;
use autocrm_domain::{AutoCrmError, Result, Session};

use super::hub::SessionSubscription;
use crate::clock::Clock;

/// Trait for session primitives offered by the auth provider
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Current session, if any
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Subscribe to session changes for the lifetime of the returned handle
    fn subscribe(&self) -> SessionSubscription;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;
}

/// Fetch the current session, failing with `AuthRequired` when there is no
/// usable one.
pub async fn require_session(auth: &dyn AuthProvider, clock: &dyn Clock) -> Result<Session> {
    match auth.get_session().await? {
        Some(session) if !session.is_expired(clock.now()) => Ok(session),
        Some(_) => Err(AutoCrmError::AuthRequired("session has expired".into())),
        None => Err(AutoCrmError::AuthRequired("no active session".into())),
    }
}
