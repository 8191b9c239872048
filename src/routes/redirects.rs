//! Legacy dashboard redirects.
//!
//! GET /dashboard                    -> /projects
//! GET /dashboard/analytics/queries  -> /projects?tab=analytics
//! GET /dashboard/analytics/traffic  -> /projects?tab=analytics
//! GET /dashboard/sources            -> /projects?tab=sources

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tracing::debug;

pub const PROJECTS: &str = "/projects";
pub const PROJECTS_ANALYTICS: &str = "/projects?tab=analytics";
pub const PROJECTS_SOURCES: &str = "/projects?tab=sources";

/// Legacy path and the canonical location it moved to.
pub const REDIRECTS: &[(&str, &str)] = &[
    ("/dashboard", PROJECTS),
    ("/dashboard/analytics/queries", PROJECTS_ANALYTICS),
    ("/dashboard/analytics/traffic", PROJECTS_ANALYTICS),
    ("/dashboard/sources", PROJECTS_SOURCES),
];

/// Build the redirects router.
pub fn router() -> Router {
    REDIRECTS
        .iter()
        .fold(Router::new(), |router, &(from, to)| {
            router.route(from, get(move || redirect_to(from, to)))
        })
}

async fn redirect_to(from: &'static str, to: &'static str) -> Redirect {
    debug!("Redirecting {} to {}", from, to);
    Redirect::to(to)
}
