//! Observable lifecycle events

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    BootStart,
    ConfigLoaded,
    Serving,
    BootFailed,

    // Snapshots
    /// A new snapshot is live
    SnapshotPublished,
    /// Ingestion failed; the previous snapshot stays live
    SnapshotRejected,
    /// Build succeeded but a later revision was already live
    SnapshotSuperseded,

    // Reads
    LookupMiss,
    /// Internal invariant violated while reading a published snapshot
    InvariantViolated,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "VERSTREE_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "VERSTREE_SERVING",
            Event::BootFailed => "VERSTREE_STARTUP_FAILED",
            Event::SnapshotPublished => "SNAPSHOT_PUBLISHED",
            Event::SnapshotRejected => "SNAPSHOT_REJECTED",
            Event::SnapshotSuperseded => "SNAPSHOT_SUPERSEDED",
            Event::LookupMiss => "LOOKUP_MISS",
            Event::InvariantViolated => "INVARIANT_VIOLATED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_upper_snake() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::Serving,
            Event::BootFailed,
            Event::SnapshotPublished,
            Event::SnapshotRejected,
            Event::SnapshotSuperseded,
            Event::LookupMiss,
            Event::InvariantViolated,
        ];
        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_only_boot_failure_is_fatal() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::SnapshotRejected.is_fatal());
    }
}
