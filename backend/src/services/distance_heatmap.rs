use std::collections::BTreeMap;

use log::{debug, warn};

use crate::api::{DistanceDelayCell, DistanceHeatmapData};
use crate::models::{AirlineSelection, DistanceRange, FlightRecord};

use super::error::{AggregationError, AggregationResult};
use super::stats::EqualWidthBins;

/// Default number of distance buckets.
pub const DEFAULT_DISTANCE_BUCKETS: usize = 30;

/// Reject inverted (or NaN) distance ranges.
pub fn validate_distance_range(range: &DistanceRange) -> AggregationResult<()> {
    if range.is_inverted() {
        warn!("Rejecting inverted distance range [{}, {}]", range.min, range.max);
        return Err(AggregationError::InvalidDistanceRange {
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Smallest and largest record distance, `None` when empty.
pub fn distance_span(records: &[FlightRecord]) -> Option<(f64, f64)> {
    records
        .iter()
        .map(|r| r.distance)
        .fold(None, |acc: Option<(f64, f64)>, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
}

/// `[floor(min), ceil(max)]` of the record distances, `None` when empty.
pub fn distance_extent(records: &[FlightRecord]) -> Option<(f64, f64)> {
    distance_span(records).map(|(lo, hi)| (lo.floor(), hi.ceil()))
}

/// Mean total delay per (distance bucket, airline).
///
/// Keeps records with `range.min <= distance <= range.max` whose airline is in
/// `airlines` (empty means all), then splits the observed distance span of
/// those records into `n_bins` equal-width buckets. The grid is dense: cells
/// without flights have `mean_delay = None`.
pub fn compute_distance_heatmap(
    records: &[FlightRecord],
    range: DistanceRange,
    airlines: &AirlineSelection,
    n_bins: usize,
) -> AggregationResult<DistanceHeatmapData> {
    validate_distance_range(&range)?;
    if n_bins == 0 {
        return Err(AggregationError::InvalidBinCount {
            view: "distance_heatmap",
        });
    }
    let (lo, hi) = distance_extent(records).unwrap_or((0.0, 0.0));
    let echoed = range.bounded_by(lo, hi);

    let filtered: Vec<&FlightRecord> = records
        .iter()
        .filter(|r| range.contains(r.distance) && airlines.matches(&r.airline_name))
        .collect();

    let Some(buckets) = EqualWidthBins::spanning(filtered.iter().map(|r| r.distance), n_bins)
    else {
        debug!(
            "Distance heatmap: no records in [{}, {}] for selection {:?}",
            range.min,
            range.max,
            airlines.names()
        );
        return Ok(DistanceHeatmapData {
            cells: vec![],
            bucket_edges: vec![],
            airlines: vec![],
            distance_range: echoed,
            total_count: 0,
        });
    };

    // airline -> per-bucket (delay sum, count)
    let mut grid: BTreeMap<&str, Vec<(f64, usize)>> = BTreeMap::new();
    for record in &filtered {
        let row = grid
            .entry(record.airline_name.as_str())
            .or_insert_with(|| vec![(0.0, 0); n_bins]);
        let cell = &mut row[buckets.index_of(record.distance)];
        cell.0 += record.total_delay;
        cell.1 += 1;
    }

    let mut cells = Vec::with_capacity(grid.len() * n_bins);
    for (airline, row) in &grid {
        for (bucket, &(sum, count)) in row.iter().enumerate() {
            let (bucket_start, bucket_end) = buckets.bounds(bucket);
            cells.push(DistanceDelayCell {
                distance_bucket: bucket,
                bucket_start,
                bucket_end,
                airline: airline.to_string(),
                mean_delay: (count > 0).then(|| sum / count as f64),
                flight_count: count,
            });
        }
    }

    Ok(DistanceHeatmapData {
        cells,
        bucket_edges: buckets.edges(),
        airlines: grid.keys().map(|a| a.to_string()).collect(),
        distance_range: echoed,
        total_count: filtered.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::flight;

    fn sample() -> Vec<FlightRecord> {
        vec![
            flight("AA", "JFK", 100.0, 10.0, 0.0),
            flight("AA", "JFK", 400.0, 30.0, 0.0),
            flight("DL", "ATL", 400.0, 0.0, 8.0),
            flight("B6", "BOS", 1200.0, 50.0, 50.0),
        ]
    }

    #[test]
    fn test_heatmap_rejects_inverted_range() {
        let err = compute_distance_heatmap(
            &sample(),
            DistanceRange::new(600.0, 0.0),
            &AirlineSelection::all(),
            30,
        )
        .unwrap_err();
        assert_eq!(err, AggregationError::InvalidDistanceRange { min: 600.0, max: 0.0 });
    }

    #[test]
    fn test_heatmap_rejects_zero_buckets() {
        assert!(compute_distance_heatmap(
            &sample(),
            DistanceRange::new(0.0, 600.0),
            &AirlineSelection::all(),
            0
        )
        .is_err());
    }

    #[test]
    fn test_heatmap_gaps_are_none_not_zero() {
        let data = compute_distance_heatmap(
            &sample(),
            DistanceRange::new(0.0, 500.0),
            &AirlineSelection::all(),
            3,
        )
        .unwrap();

        assert_eq!(data.total_count, 3);
        assert_eq!(data.airlines, vec!["American Airlines Inc.", "Delta Air Lines Inc."]);
        assert_eq!(data.bucket_edges, vec![100.0, 200.0, 300.0, 400.0]);
        assert_eq!(data.cells.len(), 2 * 3);

        let aa: Vec<Option<f64>> = data
            .cells
            .iter()
            .filter(|c| c.airline == "American Airlines Inc.")
            .map(|c| c.mean_delay)
            .collect();
        assert_eq!(aa, vec![Some(10.0), None, Some(30.0)]);

        let dl_first = data
            .cells
            .iter()
            .find(|c| c.airline == "Delta Air Lines Inc." && c.distance_bucket == 0)
            .unwrap();
        assert_eq!(dl_first.mean_delay, None);
        assert_eq!(dl_first.flight_count, 0);
    }

    #[test]
    fn test_heatmap_point_range_keeps_exact_distance_only() {
        let data = compute_distance_heatmap(
            &sample(),
            DistanceRange::new(400.0, 400.0),
            &AirlineSelection::all(),
            30,
        )
        .unwrap();
        assert_eq!(data.total_count, 2);
        let populated: Vec<&DistanceDelayCell> =
            data.cells.iter().filter(|c| c.flight_count > 0).collect();
        assert_eq!(populated.len(), 2);
        assert!(populated.iter().all(|c| c.bucket_start == 400.0));
    }

    #[test]
    fn test_heatmap_no_match_is_well_formed_empty() {
        let data = compute_distance_heatmap(
            &sample(),
            DistanceRange::new(5000.0, 6000.0),
            &AirlineSelection::all(),
            30,
        )
        .unwrap();
        assert!(data.cells.is_empty());
        assert!(data.airlines.is_empty());
        assert_eq!(data.total_count, 0);
        assert_eq!(data.distance_range, DistanceRange::new(5000.0, 6000.0));
    }
}
