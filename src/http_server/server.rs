//! # HTTP Server
//!
//! Combines the version and observability routers into one Axum app.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};
use crate::service::VersionTreeService;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::version_routes::version_routes;

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(service: Arc<VersionTreeService>) -> Self {
        Self::with_config(HttpServerConfig::default(), service)
    }

    pub fn with_config(config: HttpServerConfig, service: Arc<VersionTreeService>) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, service: Arc<VersionTreeService>) -> Router {
        let metrics = Arc::clone(service.metrics());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/versions", version_routes(service))
            .nest("/observability", observability_routes(metrics))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::Serving, &[("addr", &addr.to_string())]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
