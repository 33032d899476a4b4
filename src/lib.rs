//! verstree - a deterministic, paginated version tree
//!
//! Turns a flat list of parent/child version records into an ordered,
//! paginated row list with tree connector symbols, plus the ancestry
//! highlight set for a selected version.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod snapshot;
pub mod tree;
