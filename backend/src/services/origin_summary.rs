use std::collections::HashMap;

use log::debug;

use crate::api::{OriginSummary, OriginSummaryData};
use crate::models::FlightRecord;

/// Group flights by origin airport and compute mean total delay and flight
/// count per airport.
///
/// Airports are ordered by flight count, busiest first; equal counts keep the
/// order in which the airports first appear in `records`.
pub fn compute_origin_summary(records: &[FlightRecord]) -> OriginSummaryData {
    // (airport, delay sum, count) in first-seen order
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index
            .entry(record.origin_airport.as_str())
            .or_insert_with(|| {
                groups.push((record.origin_airport.as_str(), 0.0, 0));
                groups.len() - 1
            });
        groups[slot].1 += record.total_delay;
        groups[slot].2 += 1;
    }

    let mut airports: Vec<OriginSummary> = groups
        .into_iter()
        .map(|(airport, sum, count)| OriginSummary {
            airport: airport.to_string(),
            mean_delay: sum / count as f64,
            flight_count: count,
        })
        .collect();

    // sort_by is stable, so ties keep first-seen order
    airports.sort_by(|a, b| b.flight_count.cmp(&a.flight_count));

    debug!("Origin summary over {} airports", airports.len());

    OriginSummaryData {
        airports,
        total_flights: records.len(),
    }
}
