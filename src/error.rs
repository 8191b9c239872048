//! Forwarding errors and their HTTP mapping.
//!
//! Only failures to reach or read the backend are errors. A backend answering
//! with a 4xx or 5xx status is relayed as a normal response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::models::ErrorBody;

/// Failure while forwarding a request to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend base URL and rendered path do not form a valid URL.
    #[error("invalid backend URL `{url}`: {reason}")]
    InvalidTarget { url: String, reason: String },

    /// The backend did not answer within the configured timeout.
    #[error("backend request timed out")]
    Timeout,

    /// Connecting to or sending to the backend failed.
    #[error("backend unreachable: {0}")]
    Upstream(#[source] reqwest::Error),

    /// The backend answered but its body could not be read.
    #[error("failed to read backend response: {0}")]
    Body(#[source] reqwest::Error),
}

impl ProxyError {
    /// Classify a `reqwest` send failure.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Upstream(err)
        }
    }

    /// Classify a failure while reading the backend body.
    ///
    /// The client timeout covers the whole exchange, so it can also fire here.
    pub fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Body(err)
        }
    }

    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidTarget { .. } => (StatusCode::BAD_REQUEST, "invalid_target"),
            Self::Timeout => (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout"),
            Self::Upstream(_) | Self::Body(_) => (StatusCode::BAD_GATEWAY, "bad_gateway"),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        debug!("Proxy request failed ({}): {}", status, self);

        let body = ErrorBody {
            error: kind,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
