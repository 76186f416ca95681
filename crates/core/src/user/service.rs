//! Profile resolution

use std::sync::Arc;

use autocrm_domain::{Profile, Result, Session};
use tracing::{debug, warn};

use super::access::Viewer;
use super::ports::ProfileRepository;

/// Turns sessions into viewers and user ids into display names
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Pair a session with its profile.
    ///
    /// Users without a profile row are treated as customers.
    pub async fn resolve_viewer(&self, session: Session) -> Result<Viewer> {
        let profile = match self.repository.get_profile(session.user_id()).await? {
            Some(profile) => profile,
            None => {
                debug!(user_id = session.user_id(), "no profile row, defaulting to customer");
                Profile::customer(session.user_id(), session.email())
            }
        };

        Ok(Viewer::new(session, profile))
    }

    /// Name to show for `user_id`. Lookup failures and rows with neither a
    /// name nor an email fall back to `fallback_email`.
    pub async fn display_name(&self, user_id: &str, fallback_email: &str) -> String {
        match self.repository.get_profile(user_id).await {
            Ok(Some(profile)) => match profile.display_name() {
                "" => fallback_email.to_string(),
                name => name.to_string(),
            },
            Ok(None) => fallback_email.to_string(),
            Err(err) => {
                warn!(user_id, error = %err, "profile lookup failed, using email");
                fallback_email.to_string()
            }
        }
    }
}
