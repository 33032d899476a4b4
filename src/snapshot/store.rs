//! SnapshotStore - atomic publish, lock-free-ish reads
//!
//! Readers clone the current `Arc` under a short read lock and work on it
//! for the rest of the request. Publishing builds the replacement outside
//! the lock and swaps only a complete snapshot; a failed build leaves the
//! previous one live.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::model::{TreeResult, Version, VersionRecord};

use super::revision::Revision;
use super::tree_snapshot::TreeSnapshot;

#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<TreeSnapshot>>,
    last_revision: AtomicU64,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    /// Store holding the empty snapshot
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(TreeSnapshot::empty())),
            last_revision: AtomicU64::new(Revision::INITIAL.value()),
        }
    }

    /// Snapshot to serve one request from
    pub fn current(&self) -> Arc<TreeSnapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    pub fn revision(&self) -> Revision {
        self.current().revision()
    }

    /// Validate, build and publish raw records.
    pub fn publish(&self, records: Vec<VersionRecord>) -> TreeResult<Published> {
        let revision = self.allocate_revision();
        let snapshot = TreeSnapshot::from_records(revision, records)?;
        Ok(self.install(snapshot))
    }

    /// Build and publish already validated versions.
    pub fn publish_versions(&self, versions: Vec<Version>) -> TreeResult<Published> {
        let revision = self.allocate_revision();
        let snapshot = TreeSnapshot::build(revision, versions)?;
        Ok(self.install(snapshot))
    }

    fn allocate_revision(&self) -> Revision {
        Revision::new(self.last_revision.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Install `snapshot` unless a later revision got there first.
    fn install(&self, snapshot: TreeSnapshot) -> Published {
        let snapshot = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let installed = snapshot.revision() > guard.revision();
        if installed {
            *guard = Arc::clone(&snapshot);
        }
        Published { snapshot, installed }
    }
}

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct Published {
    /// The snapshot built from the caller's records
    pub snapshot: Arc<TreeSnapshot>,
    /// False when a later revision was already live and this build was dropped
    pub installed: bool,
}
