//! Error types for CargoTrack.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::DEMO_AWB;

/// Unified error type for CargoTrack operations.
///
/// Both variants are caller-input errors; this service has no external
/// dependency that can fail server-side.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The caller did not supply an AWB number.
    #[error("Missing awb parameter")]
    MissingAwb,

    /// The supplied AWB number is not known to this service.
    #[error("Shipment not found: {0}")]
    ShipmentNotFound(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let (status, message, hint) = match &self {
            TrackerError::MissingAwb => (
                StatusCode::BAD_REQUEST,
                format!("Missing awb parameter. Example: /api/shipment?awb={DEMO_AWB}"),
                None,
            ),
            TrackerError::ShipmentNotFound(_) => (
                StatusCode::NOT_FOUND,
                "Shipment not found in this demo API.".to_string(),
                // The hint quotes the record's own AWB rendering, which
                // carries a space where the lookup key carries a dash.
                Some("This demo only knows AWB 235-7167 9705.".to_string()),
            ),
        };

        let body = ErrorResponse {
            error: message,
            hint,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
