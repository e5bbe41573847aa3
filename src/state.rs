use crate::config::Config;
use crate::store::ResourceStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ResourceStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fresh state with an empty store.
    pub fn new(config: Config) -> Self {
        Self {
            store: ResourceStore::new(),
            config: Arc::new(config),
        }
    }
}
