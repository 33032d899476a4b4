//! Observability
//!
//! - Structured logging (JSON lines)
//! - Counter metrics
//! - Typed lifecycle events
//!
//! Observability is read-only: nothing here influences what a request
//! returns, and a failed log write is dropped.
//!
//! # Usage
//!
//! ```ignore
//! use verstree::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::SnapshotPublished, &[("revision", "3")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_pages_served();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        match event {
            Event::SnapshotRejected | Event::SnapshotSuperseded | Event::LookupMiss => Severity::Warn,
            Event::InvariantViolated => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = severity_for(event);
    if severity >= Severity::Error {
        Logger::log_stderr(severity, event.as_str(), fields);
    } else {
        Logger::log(severity, event.as_str(), fields);
    }
}
