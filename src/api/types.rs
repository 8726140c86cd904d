//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ==================== Shipment Lookup ====================

/// Query parameters for shipment lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ShipmentQuery {
    /// Air waybill number, e.g. `235-7167-9705`.
    #[serde(default)]
    pub awb: Option<String>,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of shipments the repository can resolve.
    pub shipments: usize,
    /// Timestamp.
    pub timestamp: String,
}
