//! Request orchestration
//!
//! Thin glue between the published snapshot and the outer surfaces
//! (HTTP, CLI). Holds no tree logic of its own.

mod errors;
mod orchestrator;
mod response;
mod sample;

pub use errors::{ServiceError, ServiceResult};
pub use orchestrator::VersionTreeService;
pub use response::{DebugTree, NodeView, PageQuery, PageResponse, SeedSummary, VersionDetail};
pub use sample::sample_records;
