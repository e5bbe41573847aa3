use axum::body::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Resources = HashMap<String, HashMap<String, Bytes>>;

/// In-memory payload store keyed by resource type, then id.
///
/// Clones share the same underlying map. Writers take the lock exclusively,
/// so concurrent puts never lose an inner map or expose a partial write;
/// readers run concurrently while no write is in progress.
#[derive(Clone, Default)]
pub struct ResourceStore {
    inner: Arc<RwLock<Resources>>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `payload` under `(resource_type, id)`, replacing any previous value.
    pub async fn put(&self, resource_type: &str, id: &str, payload: Bytes) {
        let mut resources = self.inner.write().await;
        let replaced = resources
            .entry(resource_type.to_string())
            .or_default()
            .insert(id.to_string(), payload)
            .is_some();
        drop(resources);

        tracing::debug!(resource_type, id, replaced, "Stored payload");
    }

    /// Fetch the payload stored under `(resource_type, id)`.
    ///
    /// Returns `None` whether the resource type or the id is unknown.
    pub async fn get(&self, resource_type: &str, id: &str) -> Option<Bytes> {
        let resources = self.inner.read().await;
        resources
            .get(resource_type)
            .and_then(|ids| ids.get(id))
            .cloned()
    }

    /// Total number of stored payloads across all resource types.
    pub async fn len(&self) -> usize {
        let resources = self.inner.read().await;
        resources.values().map(HashMap::len).sum()
    }
}
