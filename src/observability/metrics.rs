//! Metrics registry
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters. Relaxed ordering; values are exact but not
/// synchronized with each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    pages_served: AtomicU64,
    highlight_requests: AtomicU64,
    lookups: AtomicU64,
    lookup_misses: AtomicU64,
    snapshots_published: AtomicU64,
    snapshots_rejected: AtomicU64,
    snapshots_superseded: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_pages_served(&self) {
        self.pages_served.fetch_add(1, Ordering::Relaxed);
    }

    /// A page request that carried a `selected` id
    pub fn increment_highlight_requests(&self) {
        self.highlight_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookup_misses(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_snapshots_published(&self) {
        self.snapshots_published.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_snapshots_rejected(&self) {
        self.snapshots_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// A valid build that lost to a later revision
    pub fn increment_snapshots_superseded(&self) {
        self.snapshots_superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            pages_served: self.pages_served.load(Ordering::Relaxed),
            highlight_requests: self.highlight_requests.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            snapshots_published: self.snapshots_published.load(Ordering::Relaxed),
            snapshots_rejected: self.snapshots_rejected.load(Ordering::Relaxed),
            snapshots_superseded: self.snapshots_superseded.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub pages_served: u64,
    pub highlight_requests: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
    pub snapshots_published: u64,
    pub snapshots_rejected: u64,
    pub snapshots_superseded: u64,
}
