//! HTTP route modules for the gateway.
//!
//! - `projects`: project listing/creation, pages, and sync proxies
//! - `sources`: source settings proxy
//! - `conversations`: conversation message proxy
//! - `redirects`: legacy `/dashboard` URLs redirected to `/projects`
//! - `health`: liveness check

pub mod conversations;
pub mod health;
pub mod projects;
pub mod redirects;
pub mod sources;
