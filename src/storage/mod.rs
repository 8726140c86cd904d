//! Storage layer for CargoTrack.
//!
//! Shipment lookup lives behind a repository trait so a live tracking
//! feed can replace the bundled fixture data without touching the API
//! layer.

mod repository;

pub use repository::{FixtureShipmentRepository, ShipmentRepository, DEMO_AWB};
