//! Domain types for CargoTrack.
//!
//! This module contains the core business entities and value objects.

mod shipment;

pub use shipment::*;
