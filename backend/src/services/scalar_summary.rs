use crate::api::{ScalarSummary, SummaryData, SummaryTile};
use crate::models::{AirlineSelection, DistanceRange, FlightRecord};

use super::distance_heatmap::validate_distance_range;
use super::error::AggregationResult;
use super::stats::mean;

/// Global means and flight count over `records`.
///
/// Means of an empty slice are reported as 0.
pub fn compute_scalar_summary(records: &[FlightRecord]) -> SummaryData {
    let departure: Vec<f64> = records.iter().map(|r| r.departure_delay).collect();
    let arrival: Vec<f64> = records.iter().map(|r| r.arrival_delay).collect();
    let recovered: Vec<f64> = records.iter().map(|r| r.recovered_time).collect();

    let summary = ScalarSummary {
        mean_departure_delay: mean(&departure).unwrap_or(0.0),
        mean_arrival_delay: mean(&arrival).unwrap_or(0.0),
        total_flight_count: records.len(),
        mean_recovered_time: mean(&recovered).map(|m| -m).unwrap_or(0.0),
    };
    let tiles = summary_tiles(&summary);

    SummaryData { summary, tiles }
}

/// Summary restricted to the same airline and distance filters as the heatmap.
pub fn compute_filtered_summary(
    records: &[FlightRecord],
    range: DistanceRange,
    airlines: &AirlineSelection,
) -> AggregationResult<SummaryData> {
    validate_distance_range(&range)?;
    let filtered: Vec<FlightRecord> = records
        .iter()
        .filter(|r| range.contains(r.distance) && airlines.matches(&r.airline_name))
        .cloned()
        .collect();
    Ok(compute_scalar_summary(&filtered))
}

/// The four indicator tiles shown above the charts.
pub fn summary_tiles(summary: &ScalarSummary) -> Vec<SummaryTile> {
    vec![
        SummaryTile {
            title: "Mean departure delay".to_string(),
            value: format!("{:.1} min", summary.mean_departure_delay),
        },
        SummaryTile {
            title: "Mean arrival delay".to_string(),
            value: format!("{:.1} min", summary.mean_arrival_delay),
        },
        SummaryTile {
            title: "Total flights".to_string(),
            value: group_thousands(summary.total_flight_count, '.'),
        },
        SummaryTile {
            title: "Time made up".to_string(),
            value: format!("{:.1} min", summary.mean_recovered_time),
        },
    ]
}

/// `1234567` -> `"1.234.567"` for `sep = '.'`.
pub fn group_thousands(value: usize, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::flight;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_scalar_summary_empty() {
        let data = compute_scalar_summary(&[]);
        assert_eq!(data.summary.total_flight_count, 0);
        assert_eq!(data.summary.mean_departure_delay, 0.0);
        assert_eq!(data.summary.mean_recovered_time, 0.0);
        assert_eq!(data.tiles.len(), 4);
    }

    #[test]
    fn test_scalar_summary_values() {
        let mut early = flight("AA", "JFK", 100.0, 10.0, -4.0);
        early.recovered_time = 12.0;
        let mut late = flight("DL", "ATL", 100.0, -2.0, 20.0);
        late.recovered_time = -4.0;

        let data = compute_scalar_summary(&[early, late]);
        assert_eq!(data.summary.total_flight_count, 2);
        assert_eq!(data.summary.mean_departure_delay, 5.0);
        assert_eq!(data.summary.mean_arrival_delay, 10.0);
        // -mean(12, -4)
        assert_eq!(data.summary.mean_recovered_time, -4.0);

        assert_eq!(data.tiles[0].value, "5.0 min");
        assert_eq!(data.tiles[1].value, "10.0 min");
        assert_eq!(data.tiles[2].value, "2");
        assert_eq!(data.tiles[3].value, "-4.0 min");
    }

    #[test]
    fn test_filtered_summary() {
        let records = vec![
            flight("AA", "JFK", 100.0, 10.0, 0.0),
            flight("AA", "JFK", 900.0, 30.0, 0.0),
            flight("DL", "ATL", 100.0, 50.0, 0.0),
        ];
        let data = compute_filtered_summary(
            &records,
            DistanceRange::new(0.0, 500.0),
            &AirlineSelection::new(["American Airlines Inc."]),
        )
        .unwrap();
        assert_eq!(data.summary.total_flight_count, 1);
        assert_eq!(data.summary.mean_departure_delay, 10.0);

        assert!(compute_filtered_summary(
            &records,
            DistanceRange::new(10.0, 0.0),
            &AirlineSelection::all()
        )
        .is_err());
    }
}
