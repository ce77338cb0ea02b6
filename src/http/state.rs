//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::SnapshotStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot store holding the live dataset
    pub store: Arc<SnapshotStore>,
}

impl AppState {
    /// Create a new application state around the given store.
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}
