//! Source settings proxy route.
//!
//! GET /api/proxy/projects/{projectId}/sources/{sourceId}/settings
//!   -> /projects/{projectId}/sources/{sourceId}/settings

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};

use crate::error::ProxyError;
use crate::models::SourceParams;
use crate::path::BackendPath;
use crate::proxy::{ProxyRequest, SharedForwarder};

/// Build the sources router.
pub fn router() -> Router {
    Router::new().route(
        "/api/proxy/projects/{projectId}/sources/{sourceId}/settings",
        get(get_source_settings),
    )
}

/// Fetch the settings of one source. The query string is not forwarded.
async fn get_source_settings(
    Extension(forwarder): Extension<SharedForwarder>,
    Path(params): Path<SourceParams>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render(
        "/projects/{projectId}/sources/{sourceId}/settings",
        &[
            ("projectId", params.project_id.as_str()),
            ("sourceId", params.source_id.as_str()),
        ],
    );
    forwarder
        .forward(ProxyRequest::new(Method::GET, path, headers, Bytes::new()))
        .await
}
