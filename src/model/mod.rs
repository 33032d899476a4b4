//! Version data model
//!
//! Per-request ingestion of flat version records:
//! - `VersionRecord` is what callers send
//! - `Version` is what the tree is built from
//!
//! Ingestion is all-or-nothing: the first invalid record aborts the batch.

mod errors;
mod version;

pub use errors::{TreeError, TreeResult};
pub use version::{parse_timestamp, validate_all, Version, VersionRecord, VersionType, UNKNOWN_AUTHOR};
