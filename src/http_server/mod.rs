//! # HTTP Server Module
//!
//! Axum service exposing the version tree.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /versions?page=&selected=` - One page of the tree plus highlight set
//! - `GET /versions/:id` - Single version with its ancestry
//! - `POST /versions/seed` - Replace the data set
//! - `GET /versions/debug/tree` - Text rendering of the whole tree
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod version_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
