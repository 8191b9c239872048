//! Request and response models for the gateway.
//!
//! Route parameter structs mirror the path templates registered in
//! `routes/`; axum deserializes captures into them by name.

use serde::{Deserialize, Serialize};

// ============================================================================
// Route Parameters (axum::extract::Path)
// ============================================================================

/// `/api/proxy/projects/{projectId}/...`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    pub project_id: String,
}

/// `/api/proxy/projects/{projectId}/sources/{sourceId}/settings`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceParams {
    pub project_id: String,
    pub source_id: String,
}

/// `/api/proxy/projects/{projectId}/conversations/{sessionId}/messages/{messageId}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageParams {
    pub project_id: String,
    pub session_id: String,
    pub message_id: String,
}

// ============================================================================
// Response Models (Serialize to JSON output)
// ============================================================================

/// JSON body returned when the gateway itself fails a request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Liveness response for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
