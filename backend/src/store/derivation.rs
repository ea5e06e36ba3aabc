//! Derivation stage: raw CSV rows to analysis-ready flight records.
//!
//! Derived values are always computed from the raw delays, never from
//! previously clipped ones, so replaying the derivation on its own output
//! yields identical records.

use crate::models::{AirlineDirectory, FlightRecord, RawFlightRecord};

/// `max(x, 0)`
pub fn clip_nonnegative(x: f64) -> f64 {
    x.max(0.0)
}

/// Derive one record.
///
/// `total_delay` is clipped from the raw sum: departure -5 and arrival +3 give
/// a total of 0, even though the clipped parts sum to 3.
pub fn derive_record(raw: &RawFlightRecord, airlines: &AirlineDirectory) -> FlightRecord {
    FlightRecord {
        airline_code: raw.airline.clone(),
        airline_name: airlines.display_name(&raw.airline),
        origin_airport: raw.origin_airport.clone(),
        destination_airport: raw.destination_airport.clone(),
        destination_lat: raw.destination_lat,
        destination_lon: raw.destination_lon,
        scheduled_time: raw.scheduled_time,
        elapsed_time: raw.elapsed_time,
        distance: raw.distance,
        flight_number: raw.flight_number.clone(),
        raw_departure_delay: raw.departure_delay,
        raw_arrival_delay: raw.arrival_delay,
        departure_delay: clip_nonnegative(raw.departure_delay),
        arrival_delay: clip_nonnegative(raw.arrival_delay),
        total_delay: clip_nonnegative(raw.departure_delay + raw.arrival_delay),
        recovered_time: raw.scheduled_time - raw.elapsed_time,
    }
}

pub fn derive_records(raws: &[RawFlightRecord], airlines: &AirlineDirectory) -> Vec<FlightRecord> {
    raws.iter().map(|raw| derive_record(raw, airlines)).collect()
}

/// Re-run the derivation over already derived records.
pub fn rederive(records: &[FlightRecord], airlines: &AirlineDirectory) -> Vec<FlightRecord> {
    records
        .iter()
        .map(|record| derive_record(&record.to_raw(), airlines))
        .collect()
}

#[cfg(test)]
#[path = "derivation_tests.rs"]
mod derivation_tests;
