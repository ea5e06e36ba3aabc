use std::collections::BTreeMap;

use log::debug;

use crate::api::{DelayHistogramBin, DelayHistogramData};
use crate::models::{AirlineSelection, FlightRecord};

use super::error::{AggregationError, AggregationResult};
use super::stats::EqualWidthBins;

/// Default number of arrival-delay bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Overlaid per-airline histograms of arrival delay.
///
/// Records are restricted to `airlines` (empty means all), then binned into
/// `n_bins` equal-width bins spanning the observed arrival delays of the
/// remaining records. Every airline gets every bin, zero counts included.
/// A selection matching nothing yields an empty result.
pub fn compute_delay_histogram(
    records: &[FlightRecord],
    airlines: &AirlineSelection,
    n_bins: usize,
) -> AggregationResult<DelayHistogramData> {
    if n_bins == 0 {
        return Err(AggregationError::InvalidBinCount {
            view: "delay_histogram",
        });
    }

    let filtered: Vec<&FlightRecord> = records
        .iter()
        .filter(|r| airlines.matches(&r.airline_name))
        .collect();

    let Some(bins) = EqualWidthBins::spanning(filtered.iter().map(|r| r.arrival_delay), n_bins)
    else {
        debug!("Delay histogram: no records for selection {:?}", airlines.names());
        return Ok(DelayHistogramData::empty());
    };

    let mut counts: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for record in &filtered {
        let slot = counts
            .entry(record.airline_name.as_str())
            .or_insert_with(|| vec![0; n_bins]);
        slot[bins.index_of(record.arrival_delay)] += 1;
    }

    let mut histogram = Vec::with_capacity(counts.len() * n_bins);
    for (airline, airline_counts) in &counts {
        for (index, &count) in airline_counts.iter().enumerate() {
            let (bin_start, bin_end) = bins.bounds(index);
            histogram.push(DelayHistogramBin {
                airline: airline.to_string(),
                bin_start,
                bin_end,
                count,
            });
        }
    }

    Ok(DelayHistogramData {
        bins: histogram,
        bin_edges: bins.edges(),
        airlines: counts.keys().map(|a| a.to_string()).collect(),
        total_count: filtered.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::flight;

    fn sample() -> Vec<FlightRecord> {
        vec![
            flight("AA", "JFK", 100.0, 0.0, 0.0),
            flight("AA", "JFK", 100.0, 0.0, 40.0),
            flight("B6", "BOS", 100.0, 0.0, 10.0),
            flight("DL", "ATL", 100.0, 0.0, 39.0),
        ]
    }

    #[test]
    fn test_histogram_rejects_zero_bins() {
        let err = compute_delay_histogram(&sample(), &AirlineSelection::all(), 0).unwrap_err();
        assert_eq!(err, AggregationError::InvalidBinCount { view: "delay_histogram" });
    }

    #[test]
    fn test_histogram_all_airlines() {
        let data = compute_delay_histogram(&sample(), &AirlineSelection::all(), 4).unwrap();

        assert_eq!(data.total_count, 4);
        assert_eq!(data.bin_edges, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(
            data.airlines,
            vec!["American Airlines Inc.", "Delta Air Lines Inc.", "JetBlue Airways"]
        );
        assert_eq!(data.bins.len(), 3 * 4);

        let aa: Vec<usize> = data
            .bins
            .iter()
            .filter(|b| b.airline == "American Airlines Inc.")
            .map(|b| b.count)
            .collect();
        assert_eq!(aa, vec![1, 0, 0, 1]);

        let total: usize = data.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, data.total_count);
    }

    #[test]
    fn test_histogram_empty_selection_equals_all_known() {
        let records = sample();
        let all = compute_delay_histogram(&records, &AirlineSelection::all(), 40).unwrap();
        let explicit = compute_delay_histogram(
            &records,
            &AirlineSelection::new(["JetBlue Airways", "American Airlines Inc.", "Delta Air Lines Inc."]),
            40,
        )
        .unwrap();
        assert_eq!(all, explicit);
    }

    #[test]
    fn test_histogram_selection_restricts_airlines() {
        let data =
            compute_delay_histogram(&sample(), &AirlineSelection::new(["JetBlue Airways"]), 40)
                .unwrap();
        assert_eq!(data.airlines, vec!["JetBlue Airways"]);
        assert_eq!(data.total_count, 1);
        // single value range widens to [10, 11]
        assert_eq!(data.bin_edges.first(), Some(&10.0));
        assert_eq!(data.bins.iter().map(|b| b.count).sum::<usize>(), 1);
    }

    #[test]
    fn test_histogram_unmatched_selection_is_empty_not_error() {
        let data =
            compute_delay_histogram(&sample(), &AirlineSelection::new(["Nobody Air"]), 40).unwrap();
        assert_eq!(data, DelayHistogramData::empty());
    }
}
