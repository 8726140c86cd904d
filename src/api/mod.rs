//! HTTP API layer for CargoTrack.
//!
//! Provides REST endpoints for shipment tracking lookups.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
