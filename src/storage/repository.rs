//! Shipment repository: lookup-by-AWB behind a trait.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{LegStatus, Shipment, ShipmentLeg, ShipmentStatus};

/// The one AWB number this demo data set resolves.
///
/// Lookups match this dash-delimited form. The stored record's own `awb`
/// field carries the space-delimited rendering (`235-7167 9705`) as
/// printed on the waybill; both spellings are preserved exactly as they
/// appear in the upstream fixture.
pub const DEMO_AWB: &str = "235-7167-9705";

/// Lookup-by-identifier capability for shipments.
///
/// The fixture implementation below serves canned data; a real
/// deployment would implement this trait against an airline tracking
/// feed.
pub trait ShipmentRepository: Send + Sync {
    /// Resolve an AWB number to its shipment record.
    ///
    /// Matching is exact: case-sensitive, no normalization of spacing or
    /// punctuation.
    fn find_by_awb(&self, awb: &str) -> Option<Shipment>;

    /// Number of shipments this repository can resolve.
    fn count(&self) -> usize;
}

/// Immutable in-memory repository holding the demo shipment.
///
/// Constructed once at startup and never mutated, so it is safe to share
/// across handlers without synchronization.
pub struct FixtureShipmentRepository {
    entries: Vec<(String, Shipment)>,
}

impl FixtureShipmentRepository {
    /// Build the repository with the bundled demo data.
    pub fn new() -> Self {
        let demo = demo_shipment();
        demo.validate()
            .expect("demo shipment fixture must be internally consistent");

        Self {
            entries: vec![(DEMO_AWB.to_string(), demo)],
        }
    }
}

impl Default for FixtureShipmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipmentRepository for FixtureShipmentRepository {
    fn find_by_awb(&self, awb: &str) -> Option<Shipment> {
        self.entries
            .iter()
            .find(|(key, _)| key == awb)
            .map(|(_, shipment)| shipment.clone())
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("fixture timestamps are valid calendar dates")
}

/// The demo shipment: a two-leg Turkish Airlines freighter itinerary
/// from Frankfurt to Bombay via Istanbul, mid-flight on the first leg.
fn demo_shipment() -> Shipment {
    Shipment {
        awb: "235-7167 9705".to_string(),
        airline_prefix: "235".to_string(),
        airline_name: "Turkish Airlines".to_string(),
        shipment_status: ShipmentStatus::InTransit,
        summary: "Shipment is currently in the air on the first leg FRA → IST.".to_string(),
        origin: "FRA".to_string(),
        final_destination: "BOM".to_string(),
        legs: vec![
            ShipmentLeg {
                leg_number: 1,
                from: "FRA".to_string(),
                to: "IST".to_string(),
                flight_number: "TK6404".to_string(),
                scheduled_departure: ts(2025, 11, 8, 10, 0),
                scheduled_arrival: ts(2025, 11, 8, 14, 0),
                estimated_departure: ts(2025, 11, 8, 10, 10),
                estimated_arrival: ts(2025, 11, 8, 14, 20),
                status: LegStatus::InFlight,
                remark: "Freighter departed Frankfurt and is en-route to Istanbul.".to_string(),
            },
            ShipmentLeg {
                leg_number: 2,
                from: "IST".to_string(),
                to: "BOM".to_string(),
                flight_number: "TK6110".to_string(),
                scheduled_departure: ts(2025, 11, 9, 2, 0),
                scheduled_arrival: ts(2025, 11, 9, 8, 30),
                estimated_departure: ts(2025, 11, 9, 2, 0),
                estimated_arrival: ts(2025, 11, 9, 8, 30),
                status: LegStatus::Scheduled,
                remark: "Planned connection from Istanbul to Bombay.".to_string(),
            },
        ],
        current_leg_number: Some(1),
        current_location_hint: Some(
            "In flight between Frankfurt (FRA) and Istanbul (IST).".to_string(),
        ),
        last_updated: ts(2025, 11, 8, 11, 30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_fixture_satisfies_invariants() {
        assert!(demo_shipment().validate().is_ok());
    }

    #[test]
    fn test_find_by_demo_awb() {
        let repo = FixtureShipmentRepository::new();
        let shipment = repo.find_by_awb(DEMO_AWB).unwrap();

        // The lookup key is dash-delimited; the record itself renders
        // the AWB with a space.
        assert_eq!(shipment.awb, "235-7167 9705");
        assert_eq!(shipment.shipment_status, ShipmentStatus::InTransit);
        assert_eq!(shipment.legs.len(), 2);
        assert_eq!(shipment.legs[0].flight_number, "TK6404");
        assert_eq!(shipment.legs[1].flight_number, "TK6110");
        assert_eq!(shipment.current_leg_number, Some(1));
    }

    #[test]
    fn test_find_is_exact_match_only() {
        let repo = FixtureShipmentRepository::new();

        assert!(repo.find_by_awb("000-0000-0000").is_none());
        // The record's own space-delimited rendering is not a valid key.
        assert!(repo.find_by_awb("235-7167 9705").is_none());
        // No case or punctuation normalization.
        assert!(repo.find_by_awb("235-7167-9705 ").is_none());
        assert!(repo.find_by_awb("235 7167 9705").is_none());
    }

    #[test]
    fn test_count() {
        let repo = FixtureShipmentRepository::new();
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_lookup_returns_identical_record_each_time() {
        let repo = FixtureShipmentRepository::new();
        let first = repo.find_by_awb(DEMO_AWB).unwrap();
        let second = repo.find_by_awb(DEMO_AWB).unwrap();
        assert_eq!(first, second);
    }
}
