//! Project proxy routes.
//!
//! GET  /api/proxy/projects                     -> /projects{?query}
//! POST /api/proxy/projects                     -> /projects
//! GET  /api/proxy/projects/{projectId}/pages   -> /projects/{projectId}/pages{?query}
//! POST /api/proxy/projects/{projectId}/pages   -> /projects/{projectId}/pages
//! POST /api/proxy/projects/{projectId}/sync    -> /projects/{projectId}/sync

use axum::body::Bytes;
use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::error::ProxyError;
use crate::models::ProjectParams;
use crate::path::BackendPath;
use crate::proxy::{ProxyRequest, SharedForwarder};

/// Build the projects router.
pub fn router() -> Router {
    Router::new()
        .route("/api/proxy/projects", get(list_projects).post(create_project))
        .route(
            "/api/proxy/projects/{projectId}/pages",
            get(list_pages).post(create_page),
        )
        .route("/api/proxy/projects/{projectId}/sync", post(sync_project))
}

async fn list_projects(
    Extension(forwarder): Extension<SharedForwarder>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render("/projects", &[]).with_query(query.as_deref());
    forwarder
        .forward(ProxyRequest::new(Method::GET, path, headers, Bytes::new()))
        .await
}

async fn create_project(
    Extension(forwarder): Extension<SharedForwarder>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render("/projects", &[]);
    forwarder
        .forward(ProxyRequest::new(Method::POST, path, headers, body))
        .await
}

async fn list_pages(
    Extension(forwarder): Extension<SharedForwarder>,
    Path(params): Path<ProjectParams>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render(
        "/projects/{projectId}/pages",
        &[("projectId", params.project_id.as_str())],
    )
    .with_query(query.as_deref());
    forwarder
        .forward(ProxyRequest::new(Method::GET, path, headers, Bytes::new()))
        .await
}

async fn create_page(
    Extension(forwarder): Extension<SharedForwarder>,
    Path(params): Path<ProjectParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render(
        "/projects/{projectId}/pages",
        &[("projectId", params.project_id.as_str())],
    );
    forwarder
        .forward(ProxyRequest::new(Method::POST, path, headers, body))
        .await
}

/// Trigger a backend sync for one project. Any query string is dropped.
async fn sync_project(
    Extension(forwarder): Extension<SharedForwarder>,
    Path(params): Path<ProjectParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = BackendPath::render(
        "/projects/{projectId}/sync",
        &[("projectId", params.project_id.as_str())],
    );
    forwarder
        .forward(ProxyRequest::new(Method::POST, path, headers, body))
        .await
}
