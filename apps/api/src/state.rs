use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::session::EditorSession;
use crate::storage::PersistenceStore;
use crate::suggestion::gateway::SuggestionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one live editor session. Handlers hold the lock for a mutation and
    /// its persist, never across a suggestion call.
    pub session: Arc<Mutex<EditorSession>>,
    pub store: PersistenceStore,
    /// Pluggable suggestion source. Default: LlmSuggestionGateway.
    pub gateway: Arc<dyn SuggestionGateway>,
}

impl AppState {
    /// Writes the session's document and order. Failures are logged and the
    /// in-memory state stays authoritative.
    pub async fn persist(&self, session: &EditorSession) {
        match self.store.save(&session.document, &session.order).await {
            Ok(()) => debug!("Resume persisted"),
            Err(e) => error!("Failed to persist resume: {e}"),
        }
    }
}
