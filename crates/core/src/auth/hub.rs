//! Explicit session ownership
//!
//! The hub owns the current session. Views that need to react to sign-in or
//! sign-out hold a [`SessionSubscription`] for exactly as long as they live;
//! dropping it (or calling [`SessionSubscription::unsubscribe`]) ends the
//! subscription.

use std::sync::Arc;

use autocrm_domain::Session;
use tokio::sync::watch;

/// Owner of the current session
#[derive(Debug, Clone)]
pub struct SessionHub {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl SessionHub {
    pub fn new(initial: Option<Session>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Replace the current session and notify every live subscription.
    pub fn publish(&self, session: Option<Session>) {
        self.tx.send_replace(session);
    }

    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription { rx: self.tx.subscribe() }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new(None)
    }
}

/// A view-scoped handle on session changes
#[derive(Debug)]
pub struct SessionSubscription {
    rx: watch::Receiver<Option<Session>>,
}

impl SessionSubscription {
    pub fn current(&self) -> Option<Session> {
        self.rx.borrow().clone()
    }

    /// Wait for the next session change.
    ///
    /// Returns `None` once the owning hub is gone.
    pub async fn changed(&mut self) -> Option<Option<Session>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}
