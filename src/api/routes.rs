//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_shipment, handlers::health_check),
    components(schemas(
        crate::api::types::HealthResponse,
        crate::domain::Shipment,
        crate::domain::ShipmentLeg,
        crate::domain::ShipmentStatus,
        crate::domain::LegStatus,
    )),
    tags(
        (name = "shipments", description = "Shipment tracking endpoints"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "CargoTrack API",
        version = "0.1.0",
        description = "Air cargo tracking demo - resolves shipment status by AWB number",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Shipment lookup
        .route("/api/shipment", get(handlers::get_shipment))
        // Health
        .route("/api/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
