//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use autocrm_core::{
    require_session, AuthProvider, Clock, NoteRepository, NoteThread, ProfileRepository,
    ProfileService, PromptRelay, ReplyDrafter, SystemClock, TicketLifecycle, TicketRepository,
    TicketService, Viewer,
};
use autocrm_domain::{Config, Result, TicketId, VisibilityFilter};
use tracing::info;

use crate::auth::RestAuthProvider;
use crate::http::HttpClient;
use crate::relay::PromptRelayClient;
use crate::store::{
    AccessTokenSource, RestNoteRepository, RestProfileRepository, RestStore,
    RestTicketRepository,
};

/// Wires the REST adapters into the core services
pub struct AppContext {
    pub config: Config,
    pub auth: Arc<RestAuthProvider>,
    pub tickets: Arc<dyn TicketRepository>,
    pub notes: Arc<dyn NoteRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub relay: Arc<dyn PromptRelay>,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn from_config(config: Config) -> Result<Self> {
        let mut builder =
            HttpClient::builder().user_agent(concat!("autocrm/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.store.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let auth = Arc::new(RestAuthProvider::new(&config.store, http.clone())?);
        let tokens: Arc<dyn AccessTokenSource> = auth.clone();
        let store = RestStore::new(&config.store, http.clone(), tokens.clone())?;
        let relay = PromptRelayClient::new(&config, http, tokens)?;

        info!(store = %store.base_url(), relay = %relay.endpoint(), "application context ready");

        Ok(Self {
            auth,
            tickets: Arc::new(RestTicketRepository::new(store.clone())),
            notes: Arc::new(RestNoteRepository::new(store.clone())),
            profiles: Arc::new(RestProfileRepository::new(store)),
            relay: Arc::new(relay),
            clock: Arc::new(SystemClock),
            config,
        })
    }

    /// Resolve the signed-in viewer, failing with `AuthRequired` when there
    /// is no live session.
    pub async fn current_viewer(&self) -> Result<Viewer> {
        let session = require_session(self.auth.as_ref(), self.clock.as_ref()).await?;
        self.profile_service().resolve_viewer(session).await
    }

    /// Same as [`Self::current_viewer`], but a missing session yields `None`.
    pub async fn optional_viewer(&self) -> Result<Option<Viewer>> {
        match self.auth.get_session().await? {
            Some(session) if !session.is_expired(self.clock.now()) => {
                Ok(Some(self.profile_service().resolve_viewer(session).await?))
            }
            _ => Ok(None),
        }
    }

    pub fn ticket_service(&self) -> TicketService {
        TicketService::new(self.tickets.clone())
    }

    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.profiles.clone())
    }

    pub fn reply_drafter(&self) -> ReplyDrafter {
        ReplyDrafter::new(self.relay.clone())
    }

    pub fn lifecycle(&self, viewer: Viewer) -> Result<TicketLifecycle> {
        TicketLifecycle::new(self.tickets.clone(), viewer)
    }

    pub fn note_thread(&self, ticket_id: TicketId, filter: VisibilityFilter) -> NoteThread {
        NoteThread::new(self.notes.clone(), ticket_id, filter)
    }
}
