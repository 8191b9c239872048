//! Forwarding of rewritten requests to the backend API.
//!
//! Route handlers only build a [`BackendPath`]; everything about talking to
//! the backend lives behind the [`Forwarder`] trait. The handlers receive a
//! [`SharedForwarder`] from axum extensions:
//!
//! ```ignore
//! async fn my_handler(
//!     Extension(forwarder): Extension<SharedForwarder>,
//! ) -> Result<Response, ProxyError> {
//!     forwarder.forward(request).await
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::Method;
use axum::response::Response;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::GatewayConfig;
use crate::error::ProxyError;
use crate::path::BackendPath;

/// Header used to correlate gateway and backend logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Headers that describe a single hop and must not be relayed.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Type alias for the forwarder shared by all route handlers.
pub type SharedForwarder = Arc<dyn Forwarder>;

/// A request ready to be sent to the backend.
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub method: Method,
    pub path: BackendPath,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ProxyRequest {
    pub fn new(method: Method, path: BackendPath, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            path,
            headers,
            body,
        }
    }
}

/// Sends a [`ProxyRequest`] to the backend and returns its response unchanged.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, request: ProxyRequest) -> Result<Response, ProxyError>;
}

/// [`Forwarder`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<HeaderValue>,
}

impl HttpForwarder {
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let api_key = config
            .backend_api_key
            .as_deref()
            .map(|key| HeaderValue::from_str(&format!("Bearer {key}")))
            .transpose()
            .map_err(|_| anyhow::anyhow!("BACKEND_API_KEY contains characters not allowed in a header"))?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
            api_key,
        })
    }

    /// Wrap the forwarder for use as an axum extension.
    pub fn shared(self) -> SharedForwarder {
        Arc::new(self)
    }

    /// A `#` can only reach the rendered path through a decoded route
    /// parameter, so it is escaped rather than parsed as a fragment.
    fn target_url(&self, path: &BackendPath) -> Result<reqwest::Url, ProxyError> {
        let url = format!("{}{}", self.base_url, path.as_str().replace('#', "%23"));
        reqwest::Url::parse(&url).map_err(|e| ProxyError::InvalidTarget {
            url,
            reason: e.to_string(),
        })
    }

    fn outbound_headers(&self, incoming: &HeaderMap) -> (HeaderMap, String) {
        let mut headers = strip_hop_by_hop(incoming);
        headers.remove(header::HOST);

        if let Some(api_key) = &self.api_key {
            if !headers.contains_key(header::AUTHORIZATION) {
                headers.insert(header::AUTHORIZATION, api_key.clone());
            }
        }

        let existing = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let request_id = match existing {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().to_string();
                if let Ok(value) = HeaderValue::from_str(&id) {
                    headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                id
            }
        };

        (headers, request_id)
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, request: ProxyRequest) -> Result<Response, ProxyError> {
        let url = self.target_url(&request.path)?;
        let (headers, request_id) = self.outbound_headers(&request.headers);

        let mut outbound = self
            .client
            .request(request.method.clone(), url)
            .headers(headers);
        if !request.body.is_empty() {
            outbound = outbound.body(request.body);
        }

        let upstream = outbound.send().await.map_err(|e| {
            error!(
                request_id = %request_id,
                method = %request.method,
                path = %request.path,
                "Backend request failed: {}", e
            );
            ProxyError::from_send(e)
        })?;

        let status = upstream.status();
        let headers = strip_hop_by_hop(upstream.headers());
        let body = upstream.bytes().await.map_err(|e| {
            error!(
                request_id = %request_id,
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                "Reading backend response failed: {}", e
            );
            ProxyError::from_body(e)
        })?;

        info!(
            request_id = %request_id,
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "Forwarded request to backend"
        );

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy `headers`, dropping hop-by-hop headers and `content-length`.
///
/// Body length is recomputed for whichever side sends next.
pub fn strip_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || *name == header::CONTENT_LENGTH {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}
