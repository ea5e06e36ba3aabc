use std::collections::HashMap;

use crate::api::{AirlineCount, ColumnProfile, DatasetProfile};
use crate::models::FlightRecord;

use super::stats::compute_stats;

type ColumnAccessor = fn(&FlightRecord) -> f64;

const PROFILED_COLUMNS: [(&str, ColumnAccessor); 7] = [
    ("SCHEDULED_TIME", |r: &FlightRecord| r.scheduled_time),
    ("ELAPSED_TIME", |r: &FlightRecord| r.elapsed_time),
    ("DEPARTURE_DELAY", |r: &FlightRecord| r.departure_delay),
    ("ARRIVAL_DELAY", |r: &FlightRecord| r.arrival_delay),
    ("TOTAL_DELAY", |r: &FlightRecord| r.total_delay),
    ("DISTANCE", |r: &FlightRecord| r.distance),
    ("RECOVERED_TIME", |r: &FlightRecord| r.recovered_time),
];

/// Descriptive statistics per numeric column and flight counts per carrier.
pub fn compute_dataset_profile(records: &[FlightRecord]) -> DatasetProfile {
    let columns = PROFILED_COLUMNS
        .iter()
        .map(|(name, accessor)| {
            let values: Vec<f64> = records.iter().map(accessor).collect();
            ColumnProfile {
                column: (*name).to_string(),
                stats: compute_stats(&values),
            }
        })
        .collect();

    let mut counts: HashMap<&str, (usize, &str)> = HashMap::new();
    for record in records {
        let entry = counts
            .entry(record.airline_code.as_str())
            .or_insert((0, record.airline_name.as_str()));
        entry.0 += 1;
    }
    let mut airline_counts: Vec<AirlineCount> = counts
        .into_iter()
        .map(|(code, (flights, name))| AirlineCount {
            airline_code: code.to_string(),
            airline_name: name.to_string(),
            flights,
        })
        .collect();
    airline_counts.sort_by(|a, b| {
        b.flights
            .cmp(&a.flights)
            .then_with(|| a.airline_code.cmp(&b.airline_code))
    });

    DatasetProfile {
        columns,
        airline_counts,
        total_count: records.len(),
    }
}
