use folio_core::config::Config;
use std::sync::Arc;

/// Shared application state passed to all route handlers. Read-only: every
/// request rebuilds its composer from the submitted record.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
