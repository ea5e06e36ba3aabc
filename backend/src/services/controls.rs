use std::collections::BTreeSet;

use crate::api::{ControlsData, DistanceSlider, MetricOption, SliderMark};
use crate::models::{DelayMetric, FlightRecord};

use super::distance_heatmap::distance_span;
use super::AggregationSettings;

const DEFAULT_LOW_OFFSET: f64 = 200.0;
const DEFAULT_HIGH_OFFSET: f64 = 400.0;
const MIDPOINT_LABEL: &str = "Ø";

/// Widget metadata derived from the loaded records.
pub fn compute_controls(records: &[FlightRecord], settings: &AggregationSettings) -> ControlsData {
    let metric_options = DelayMetric::ALL
        .iter()
        .map(|metric| MetricOption {
            value: *metric,
            label: metric.label().to_string(),
        })
        .collect();

    let airline_options: Vec<String> = records
        .iter()
        .map(|r| r.airline_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let default_airlines = airline_options
        .iter()
        .take(settings.default_airline_count)
        .cloned()
        .collect();

    ControlsData {
        metric_options,
        default_metric: DelayMetric::default(),
        airline_options,
        default_airlines,
        distance: distance_slider(records, settings.distance_step),
    }
}

/// Slider over the whole miles of the observed distances, with marks at both
/// ends and at the integer midpoint.
fn distance_slider(records: &[FlightRecord], step: f64) -> DistanceSlider {
    let (min, max) = distance_span(records)
        .map(|(lo, hi)| (lo.trunc(), hi.trunc()))
        .unwrap_or((0.0, 0.0));

    let low = (min + DEFAULT_LOW_OFFSET).clamp(min, max);
    let high = (max - DEFAULT_HIGH_OFFSET).clamp(min, max);
    let default_value = if low <= high { [low, high] } else { [min, max] };

    let mid = ((min + max) / 2.0).floor();
    let marks = vec![
        SliderMark {
            value: min,
            label: format!("{min:.0}"),
        },
        SliderMark {
            value: mid,
            label: MIDPOINT_LABEL.to_string(),
        },
        SliderMark {
            value: max,
            label: format!("{max:.0}"),
        },
    ];

    DistanceSlider {
        min,
        max,
        step,
        default_value,
        marks,
    }
}
