//! Published tree snapshots
//!
//! A snapshot is the unit of consistency: every response is computed from
//! exactly one of them.
//!
//! # Lifecycle
//!
//! ```text
//! records ──validate──→ versions ──build──→ TreeSnapshot(rev n) ──swap──→ SnapshotStore
//!                                                                   ↑
//!                                  readers ── current() ── Arc clone ┘
//! ```
//!
//! Ingestion errors abort before the swap.

mod revision;
mod tree_snapshot;
mod store;

pub use revision::Revision;
pub use tree_snapshot::TreeSnapshot;
pub use store::{Published, SnapshotStore};
