//! Shipment-related domain types.
//!
//! Represents an air-freight shipment and the flight legs of its
//! itinerary. All records are plain data carriers; the serialized JSON
//! uses camelCase keys to match the published API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-leg flight status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegStatus {
    /// Departure is planned but the flight has not left.
    Scheduled,
    /// The aircraft is airborne on this leg.
    InFlight,
    /// The flight has arrived at the leg destination.
    Landed,
    /// The flight was cancelled.
    Cancelled,
}

impl std::fmt::Display for LegStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegStatus::Scheduled => write!(f, "scheduled"),
            LegStatus::InFlight => write!(f, "in_flight"),
            LegStatus::Landed => write!(f, "landed"),
            LegStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Coarse overall shipment status, distinct from per-leg status but
/// expected to be consistent with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Space is reserved; nothing has moved yet.
    Booked,
    /// At least one leg has departed and delivery is pending.
    InTransit,
    /// The shipment reached its final destination.
    Delivered,
    /// The booking was cancelled.
    Cancelled,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipmentStatus::Booked => write!(f, "booked"),
            ShipmentStatus::InTransit => write!(f, "in_transit"),
            ShipmentStatus::Delivered => write!(f, "delivered"),
            ShipmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One flight segment of a multi-leg shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentLeg {
    /// 1-based position of this leg within the itinerary.
    pub leg_number: u32,
    /// Departure airport code.
    pub from: String,
    /// Arrival airport code.
    pub to: String,
    /// Carrier and flight number, e.g. `TK6404`.
    pub flight_number: String,
    pub scheduled_departure: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
    pub estimated_departure: DateTime<Utc>,
    pub estimated_arrival: DateTime<Utc>,
    /// Current status of this leg.
    pub status: LegStatus,
    /// Human-readable note about this leg.
    pub remark: String,
}

/// A tracked air-freight shipment.
///
/// The `awb` field is the entity's natural key. Legs are ordered by
/// `leg_number` ascending and cover the full itinerary from `origin` to
/// `final_destination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Air waybill number as printed on the waybill.
    pub awb: String,
    /// Three-digit airline prefix of the AWB.
    pub airline_prefix: String,
    pub airline_name: String,
    /// Coarse overall status.
    pub shipment_status: ShipmentStatus,
    /// Human-readable description of the current state.
    pub summary: String,
    /// Airport code where the itinerary starts.
    pub origin: String,
    /// Airport code where the itinerary ends.
    pub final_destination: String,
    /// Flight legs, ordered by leg number.
    pub legs: Vec<ShipmentLeg>,
    /// Leg currently in progress, or `None` when no leg is active
    /// (not yet departed, or delivered).
    pub current_leg_number: Option<u32>,
    /// Free-text description of the current physical location.
    pub current_location_hint: Option<String>,
    /// When this record was last refreshed.
    pub last_updated: DateTime<Utc>,
}

impl Shipment {
    /// The leg currently in progress, if any.
    pub fn current_leg(&self) -> Option<&ShipmentLeg> {
        let current = self.current_leg_number?;
        self.legs.iter().find(|leg| leg.leg_number == current)
    }

    /// Check the internal consistency of the itinerary.
    ///
    /// Verifies that legs are present and numbered contiguously from 1,
    /// that the legs span `origin` to `final_destination`, and that
    /// `current_leg_number` references an existing leg.
    pub fn validate(&self) -> Result<(), String> {
        if self.legs.is_empty() {
            return Err("shipment has no legs".to_string());
        }

        for (idx, leg) in self.legs.iter().enumerate() {
            let expected = idx as u32 + 1;
            if leg.leg_number != expected {
                return Err(format!(
                    "leg at index {idx} is numbered {}, expected {expected}",
                    leg.leg_number
                ));
            }
        }

        let first = &self.legs[0];
        if first.from != self.origin {
            return Err(format!(
                "first leg departs {} but shipment origin is {}",
                first.from, self.origin
            ));
        }

        let last = &self.legs[self.legs.len() - 1];
        if last.to != self.final_destination {
            return Err(format!(
                "last leg arrives {} but final destination is {}",
                last.to, self.final_destination
            ));
        }

        if let Some(current) = self.current_leg_number {
            if self.legs.iter().all(|leg| leg.leg_number != current) {
                return Err(format!(
                    "current leg number {current} does not match any leg"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 8, hour, min, 0).unwrap()
    }

    fn leg(number: u32, from: &str, to: &str) -> ShipmentLeg {
        ShipmentLeg {
            leg_number: number,
            from: from.to_string(),
            to: to.to_string(),
            flight_number: format!("TK{number}"),
            scheduled_departure: ts(10, 0),
            scheduled_arrival: ts(14, 0),
            estimated_departure: ts(10, 0),
            estimated_arrival: ts(14, 0),
            status: LegStatus::Scheduled,
            remark: String::new(),
        }
    }

    fn shipment(legs: Vec<ShipmentLeg>) -> Shipment {
        Shipment {
            awb: "235-0000 0000".to_string(),
            airline_prefix: "235".to_string(),
            airline_name: "Turkish Airlines".to_string(),
            shipment_status: ShipmentStatus::Booked,
            summary: String::new(),
            origin: "FRA".to_string(),
            final_destination: "BOM".to_string(),
            legs,
            current_leg_number: None,
            current_location_hint: None,
            last_updated: ts(11, 30),
        }
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&LegStatus::InFlight).unwrap();
        assert_eq!(json, "\"in_flight\"");

        let parsed: ShipmentStatus = serde_json::from_str("\"in_transit\"").unwrap();
        assert_eq!(parsed, ShipmentStatus::InTransit);
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let value = serde_json::to_value(shipment(vec![
            leg(1, "FRA", "IST"),
            leg(2, "IST", "BOM"),
        ]))
        .unwrap();

        assert!(value.get("finalDestination").is_some());
        assert!(value.get("currentLegNumber").is_some());
        assert!(value.get("lastUpdated").is_some());
        assert!(value["legs"][0].get("legNumber").is_some());
        assert!(value["legs"][0].get("flightNumber").is_some());
    }

    #[test]
    fn test_timestamps_serialize_as_utc_rfc3339() {
        let value = serde_json::to_value(shipment(vec![
            leg(1, "FRA", "IST"),
            leg(2, "IST", "BOM"),
        ]))
        .unwrap();

        assert_eq!(value["lastUpdated"], "2025-11-08T11:30:00Z");
        assert_eq!(value["legs"][0]["scheduledDeparture"], "2025-11-08T10:00:00Z");
    }

    #[test]
    fn test_null_current_leg_serializes_as_null() {
        let value = serde_json::to_value(shipment(vec![
            leg(1, "FRA", "IST"),
            leg(2, "IST", "BOM"),
        ]))
        .unwrap();

        assert!(value["currentLegNumber"].is_null());
        assert!(value["currentLocationHint"].is_null());
    }

    #[test]
    fn test_validate_accepts_consistent_itinerary() {
        let mut s = shipment(vec![leg(1, "FRA", "IST"), leg(2, "IST", "BOM")]);
        s.current_leg_number = Some(1);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_legs() {
        let s = shipment(vec![]);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_leg_number_gap() {
        let s = shipment(vec![leg(1, "FRA", "IST"), leg(3, "IST", "BOM")]);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_origin_mismatch() {
        let s = shipment(vec![leg(1, "AMS", "IST"), leg(2, "IST", "BOM")]);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_destination_mismatch() {
        let s = shipment(vec![leg(1, "FRA", "IST"), leg(2, "IST", "DEL")]);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_dangling_current_leg() {
        let mut s = shipment(vec![leg(1, "FRA", "IST"), leg(2, "IST", "BOM")]);
        s.current_leg_number = Some(5);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_current_leg_resolution() {
        let mut s = shipment(vec![leg(1, "FRA", "IST"), leg(2, "IST", "BOM")]);
        assert!(s.current_leg().is_none());

        s.current_leg_number = Some(2);
        assert_eq!(s.current_leg().map(|l| l.from.as_str()), Some("IST"));
    }
}
