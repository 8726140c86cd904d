//! HTTP request handlers.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::types::{HealthResponse, ShipmentQuery};
use crate::domain::Shipment;
use crate::error::{TrackerError, TrackerResult};
use crate::AppState;

/// Look up a shipment by AWB number.
///
/// GET /api/shipment
#[utoipa::path(
    get,
    path = "/api/shipment",
    params(ShipmentQuery),
    responses(
        (status = 200, description = "Shipment found", body = Shipment),
        (status = 400, description = "Missing awb parameter"),
        (status = 404, description = "Unknown AWB number")
    ),
    tag = "shipments"
)]
pub async fn get_shipment(
    State(state): State<AppState>,
    Query(query): Query<ShipmentQuery>,
) -> TrackerResult<Json<Shipment>> {
    // An empty value is treated the same as an absent parameter.
    let awb = match query.awb.as_deref() {
        Some(awb) if !awb.is_empty() => awb,
        _ => return Err(TrackerError::MissingAwb),
    };

    let shipment = state
        .repository
        .find_by_awb(awb)
        .ok_or_else(|| TrackerError::ShipmentNotFound(awb.to_string()))?;

    tracing::info!(
        awb = %awb,
        status = %shipment.shipment_status,
        current_flight = ?shipment.current_leg().map(|leg| leg.flight_number.clone()),
        "Shipment resolved"
    );

    Ok(Json(shipment))
}

/// Health check endpoint.
///
/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        shipments: state.repository.count(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
