//! Version tree HTTP Routes
//!
//! Endpoints for paging through the linearized tree, single-version
//! lookups, replacing the data set, and a text dump for debugging.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::model::VersionRecord;
use crate::service::{
    DebugTree, PageQuery, PageResponse, SeedSummary, ServiceError, VersionDetail, VersionTreeService,
};
use crate::tree::parse_page_param;

// ==================
// Request/Response Types
// ==================

/// Raw query string; both parameters are optional and parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct VersionsQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub status: u16,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: ServiceError) -> HandlerError {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.code().to_string(),
            status: status.as_u16(),
        }),
    )
}

/// Body that is not a JSON array of objects
fn rejection_response(rejection: JsonRejection) -> HandlerError {
    let status = rejection.status();
    (
        status,
        Json(ErrorResponse {
            error: rejection.body_text(),
            code: "VERSTREE_BAD_REQUEST".to_string(),
            status: status.as_u16(),
        }),
    )
}

// ==================
// Version Routes
// ==================

/// Routes nested under `/versions`
pub fn version_routes(service: Arc<VersionTreeService>) -> Router {
    Router::new()
        .route("/", get(list_versions_handler))
        .route("/seed", post(seed_handler))
        .route("/debug/tree", get(debug_tree_handler))
        .route("/:id", get(get_version_handler))
        .with_state(service)
}

async fn list_versions_handler(
    State(service): State<Arc<VersionTreeService>>,
    Query(query): Query<VersionsQuery>,
) -> Result<Json<PageResponse>, HandlerError> {
    let query = PageQuery::new(parse_page_param(query.page.as_deref()), query.selected.as_deref());
    service.page(&query).map(Json).map_err(error_response)
}

async fn get_version_handler(
    State(service): State<Arc<VersionTreeService>>,
    Path(id): Path<String>,
) -> Result<Json<VersionDetail>, HandlerError> {
    service.lookup(&id).map(Json).map_err(error_response)
}

async fn seed_handler(
    State(service): State<Arc<VersionTreeService>>,
    payload: Result<Json<Vec<VersionRecord>>, JsonRejection>,
) -> Result<Json<SeedSummary>, HandlerError> {
    let Json(records) = payload.map_err(rejection_response)?;
    service.seed(records).map(Json).map_err(error_response)
}

async fn debug_tree_handler(State(service): State<Arc<VersionTreeService>>) -> Json<DebugTree> {
    Json(service.debug_tree())
}
