//! Conversation message proxy route.
//!
//! GET /api/proxy/projects/{projectId}/conversations/{sessionId}/messages/{messageId}
//!   -> /projects/{projectId}/conversations/{sessionId}/messages/{messageId}{?query}

use axum::body::Bytes;
use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};

use crate::error::ProxyError;
use crate::models::MessageParams;
use crate::path::BackendPath;
use crate::proxy::{ProxyRequest, SharedForwarder};

/// Build the conversations router.
pub fn router() -> Router {
    Router::new().route(
        "/api/proxy/projects/{projectId}/conversations/{sessionId}/messages/{messageId}",
        get(get_message),
    )
}

async fn get_message(
    Extension(forwarder): Extension<SharedForwarder>,
    Path(params): Path<MessageParams>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render(
        "/projects/{projectId}/conversations/{sessionId}/messages/{messageId}",
        &[
            ("projectId", params.project_id.as_str()),
            ("sessionId", params.session_id.as_str()),
            ("messageId", params.message_id.as_str()),
        ],
    )
    .with_query(query.as_deref());
    forwarder
        .forward(ProxyRequest::new(Method::GET, path, headers, Bytes::new()))
        .await
}
