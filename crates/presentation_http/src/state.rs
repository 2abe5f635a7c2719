//! Application state shared across handlers

use std::{fmt, path::PathBuf, sync::Arc};

use ai_core::{OpenAiClient, SessionIssuer, TextGenerator};

/// Shared application state
///
/// Holds only immutable handles; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Relay target for `/chat` and `/reasoning`
    pub generator: Arc<dyn TextGenerator>,
    /// Realtime session credential issuer for `/session`
    pub sessions: Arc<dyn SessionIssuer>,
    /// HTML page served at `/`
    pub index_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        sessions: Arc<dyn SessionIssuer>,
        index_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator,
            sessions,
            index_path: Arc::new(index_path.into()),
        }
    }

    /// State backed by a single provider client serving both ports
    pub fn from_client(client: OpenAiClient, index_path: impl Into<PathBuf>) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client, index_path)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("index_path", &self.index_path)
            .finish_non_exhaustive()
    }
}
