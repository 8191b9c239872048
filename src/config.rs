//! Gateway configuration.
//!
//! Settings come from environment variables (optionally seeded from a `.env`
//! file by `main`). Every variable has a default suitable for local
//! development next to a backend on `localhost:8080`.

use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GATEWAY_BIND_ADDR `{value}` is not a socket address")]
    InvalidBindAddr { value: String },

    #[error("BACKEND_API_URL `{value}` must start with http:// or https://")]
    InvalidBackendUrl { value: String },

    #[error("BACKEND_TIMEOUT_SECS `{value}` must be a positive integer")]
    InvalidTimeout { value: String },
}

/// Runtime configuration for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the backend API, without a trailing slash.
    pub backend_url: String,
    /// Bearer token sent to the backend when the caller supplies none.
    pub backend_api_key: Option<String>,
    /// Upper bound on a single backend round trip.
    pub request_timeout: Duration,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// - `GATEWAY_BIND_ADDR` (default `0.0.0.0:3000`)
    /// - `BACKEND_API_URL` (default `http://localhost:8080`)
    /// - `BACKEND_API_KEY` (optional)
    /// - `BACKEND_TIMEOUT_SECS` (default `30`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("GATEWAY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_raw.clone() })?;

        let backend_raw =
            lookup("BACKEND_API_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !(backend_raw.starts_with("http://") || backend_raw.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl { value: backend_raw });
        }
        let backend_url = backend_raw.trim_end_matches('/').to_string();

        let backend_api_key = lookup("BACKEND_API_KEY").filter(|key| !key.trim().is_empty());

        let request_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout { value: raw }),
            },
        };

        Ok(Self {
            bind_addr,
            backend_url,
            backend_api_key,
            request_timeout,
        })
    }

    /// Configuration pointing at `backend_url` with every other setting defaulted.
    pub fn for_backend(backend_url: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            backend_api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
