//! Record builders shared by the service unit tests.

use crate::models::{AirlineDirectory, FlightRecord, RawFlightRecord};
use crate::store::derive_record;

pub fn raw_flight(
    airline: &str,
    origin: &str,
    distance: f64,
    departure_delay: f64,
    arrival_delay: f64,
) -> RawFlightRecord {
    RawFlightRecord {
        airline: airline.to_string(),
        origin_airport: origin.to_string(),
        destination_airport: "ORD".to_string(),
        destination_lat: 41.98,
        destination_lon: -87.90,
        scheduled_time: 120.0,
        elapsed_time: 115.0,
        departure_delay,
        arrival_delay,
        distance,
        flight_number: "100".to_string(),
    }
}

/// Derived record with the standard airline directory.
pub fn flight(
    airline: &str,
    origin: &str,
    distance: f64,
    departure_delay: f64,
    arrival_delay: f64,
) -> FlightRecord {
    derive_record(
        &raw_flight(airline, origin, distance, departure_delay, arrival_delay),
        &AirlineDirectory::standard(),
    )
}
