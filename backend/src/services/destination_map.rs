use crate::api::{DestinationMapData, DestinationPoint};
use crate::models::{DelayMetric, FlightRecord};

use super::stats::percentile_ranks;

/// Smallest marker area on the map.
pub const BASE_MARKER_SIZE: f64 = 10.0;
/// Extra marker area at the top of the rank scale.
pub const MARKER_SIZE_RANGE: f64 = 15.0;

/// One map point per flight at its destination, sized by the percentile rank of
/// the chosen metric within the whole column.
pub fn compute_destination_map(records: &[FlightRecord], metric: DelayMetric) -> DestinationMapData {
    let values: Vec<f64> = records.iter().map(|r| r.metric(metric)).collect();
    let ranks = percentile_ranks(&values);

    let points: Vec<DestinationPoint> = records
        .iter()
        .zip(values.iter().zip(ranks))
        .map(|(record, (&value, rank))| DestinationPoint {
            lat: record.destination_lat,
            lon: record.destination_lon,
            metric_value: value,
            rank_percentile: rank,
            marker_size: BASE_MARKER_SIZE + rank * MARKER_SIZE_RANGE,
            destination_airport: record.destination_airport.clone(),
            origin_airport: record.origin_airport.clone(),
            airline_name: record.airline_name.clone(),
        })
        .collect();

    let (value_min, value_max) = if values.is_empty() {
        (0.0, 0.0)
    } else {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };

    DestinationMapData {
        metric,
        metric_label: metric.label().to_string(),
        total_count: points.len(),
        points,
        value_min,
        value_max,
    }
}
