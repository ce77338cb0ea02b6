//! Snapshot store: one shared, read-only snapshot with atomic replacement.
//!
//! Queries grab an `Arc` to the current snapshot and run against it without
//! holding any lock; a rebuild swaps the `Arc` in one step, so in-flight
//! queries keep seeing the snapshot they started with. Rebuilds themselves
//! are serialized by a dedicated mutex so two reloads cannot interleave.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::loader::{self, LoadError};
use crate::models::Snapshot;

pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
    source_path: PathBuf,
    // Held for the full duration of a rebuild; readers are unaffected.
    reload_lock: Mutex<()>,
}

impl SnapshotStore {
    /// Build the initial snapshot from `path`. Failure here is fatal to
    /// startup; there is no store without a complete snapshot.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = loader::load_snapshot(&path)?;
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
            source_path: path,
            reload_lock: Mutex::new(()),
        })
    }

    /// Wrap an already-built snapshot (used by tests and embedders).
    pub fn from_snapshot(snapshot: Snapshot, source_path: impl Into<PathBuf>) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
            source_path: source_path.into(),
            reload_lock: Mutex::new(()),
        }
    }

    /// The current snapshot. Cheap: clones the `Arc`, not the records.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Rebuild the snapshot from the source file and swap it in atomically.
    /// On failure the live snapshot is left untouched. Concurrent reload
    /// calls are serialized.
    pub fn reload(&self) -> Result<Arc<Snapshot>, LoadError> {
        let _guard = self.reload_lock.lock();
        let rebuilt = Arc::new(loader::load_snapshot(&self.source_path)?);
        *self.current.write() = rebuilt.clone();
        tracing::info!(
            records = rebuilt.len(),
            checksum = rebuilt.checksum(),
            "snapshot reloaded"
        );
        Ok(rebuilt)
    }
}
