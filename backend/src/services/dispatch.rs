//! Filter-change dispatch table.
//!
//! Each dashboard control maps to the aggregation views it invalidates, and
//! each view owns exactly one chart region:
//!
//! ```text
//! Metric         -> DestinationMap                   -> DelayMap
//! Airlines       -> DelayHistogram, DistanceHeatmap  -> AirlineHistogram, DistanceHeatmap
//! DistanceRange  -> DistanceHeatmap                  -> DistanceHeatmap
//! ```
//!
//! `OriginSummary` and `ScalarSummary` only render on a full refresh.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::{
    DelayHistogramData, DestinationMapData, DistanceHeatmapData, OriginSummaryData, SummaryData,
};
use crate::models::{AirlineSelection, DelayMetric, DistanceRange, FilterParameters, FlightRecord};

use super::delay_histogram::compute_delay_histogram;
use super::destination_map::compute_destination_map;
use super::distance_heatmap::{compute_distance_heatmap, distance_extent, validate_distance_range};
use super::error::AggregationResult;
use super::origin_summary::compute_origin_summary;
use super::scalar_summary::compute_scalar_summary;
use super::AggregationSettings;

/// A user-controlled dashboard parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterInput {
    Metric,
    Airlines,
    DistanceRange,
}

impl FilterInput {
    /// Views to recompute when this input changes.
    pub fn affected_views(self) -> &'static [View] {
        match self {
            FilterInput::Metric => &[View::DestinationMap],
            FilterInput::Airlines => &[View::DelayHistogram, View::DistanceHeatmap],
            FilterInput::DistanceRange => &[View::DistanceHeatmap],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    OriginSummary,
    DestinationMap,
    DelayHistogram,
    DistanceHeatmap,
    ScalarSummary,
}

impl View {
    pub const ALL: [View; 5] = [
        View::OriginSummary,
        View::DestinationMap,
        View::DelayHistogram,
        View::DistanceHeatmap,
        View::ScalarSummary,
    ];

    pub fn region(self) -> ChartRegion {
        match self {
            View::OriginSummary => ChartRegion::OperationsChart,
            View::DestinationMap => ChartRegion::DelayMap,
            View::DelayHistogram => ChartRegion::AirlineHistogram,
            View::DistanceHeatmap => ChartRegion::DistanceHeatmap,
            View::ScalarSummary => ChartRegion::SummaryTiles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartRegion {
    OperationsChart,
    DelayMap,
    AirlineHistogram,
    DistanceHeatmap,
    SummaryTiles,
}

/// One control changing to a new value.
///
/// JSON form: `{"input": "distance_range", "value": {"min": 0, "max": 600}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "snake_case")]
pub enum FilterChange {
    Metric(DelayMetric),
    Airlines(AirlineSelection),
    DistanceRange(DistanceRange),
}

impl FilterChange {
    pub fn input(&self) -> FilterInput {
        match self {
            FilterChange::Metric(_) => FilterInput::Metric,
            FilterChange::Airlines(_) => FilterInput::Airlines,
            FilterChange::DistanceRange(_) => FilterInput::DistanceRange,
        }
    }
}

/// Result of one aggregation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum ViewPayload {
    OriginSummary(OriginSummaryData),
    DestinationMap(DestinationMapData),
    DelayHistogram(DelayHistogramData),
    DistanceHeatmap(DistanceHeatmapData),
    ScalarSummary(SummaryData),
}

/// Recomputed contents of one chart region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionUpdate {
    pub region: ChartRegion,
    pub payload: ViewPayload,
}

/// Parameters of a fresh session: total delay, every airline, the full
/// distance extent of the data.
pub fn default_parameters(records: &[FlightRecord]) -> FilterParameters {
    let (lo, hi) = distance_extent(records).unwrap_or((0.0, 0.0));
    FilterParameters {
        metric: DelayMetric::default(),
        airlines: AirlineSelection::all(),
        distance: DistanceRange::new(lo, hi),
    }
}

/// Apply `change` to `params`.
///
/// An invalid change is rejected and `params` is left as it was.
pub fn apply_change(
    params: &mut FilterParameters,
    change: FilterChange,
) -> AggregationResult<FilterInput> {
    let input = change.input();
    match change {
        FilterChange::Metric(metric) => params.metric = metric,
        FilterChange::Airlines(airlines) => params.airlines = airlines,
        FilterChange::DistanceRange(range) => {
            validate_distance_range(&range)?;
            params.distance = range;
        }
    }
    Ok(input)
}

/// Run a single view against the current parameters.
pub fn compute_view(
    view: View,
    records: &[FlightRecord],
    params: &FilterParameters,
    settings: &AggregationSettings,
) -> AggregationResult<ViewPayload> {
    let payload = match view {
        View::OriginSummary => ViewPayload::OriginSummary(compute_origin_summary(records)),
        View::DestinationMap => {
            ViewPayload::DestinationMap(compute_destination_map(records, params.metric))
        }
        View::DelayHistogram => ViewPayload::DelayHistogram(compute_delay_histogram(
            records,
            &params.airlines,
            settings.histogram_bins,
        )?),
        View::DistanceHeatmap => ViewPayload::DistanceHeatmap(compute_distance_heatmap(
            records,
            params.distance,
            &params.airlines,
            settings.heatmap_distance_bins,
        )?),
        View::ScalarSummary => ViewPayload::ScalarSummary(compute_scalar_summary(records)),
    };
    Ok(payload)
}

fn compute_regions(
    views: &[View],
    records: &[FlightRecord],
    params: &FilterParameters,
    settings: &AggregationSettings,
) -> AggregationResult<Vec<RegionUpdate>> {
    views
        .iter()
        .map(|&view| {
            Ok(RegionUpdate {
                region: view.region(),
                payload: compute_view(view, records, params, settings)?,
            })
        })
        .collect()
}

/// Recompute only the regions affected by a change of `input`.
pub fn recompute_affected(
    input: FilterInput,
    records: &[FlightRecord],
    params: &FilterParameters,
    settings: &AggregationSettings,
) -> AggregationResult<Vec<RegionUpdate>> {
    let views = input.affected_views();
    debug!("{:?} changed, recomputing {:?}", input, views);
    compute_regions(views, records, params, settings)
}

/// Outcome of a change evaluated against a copy of the session parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedChange {
    pub input: FilterInput,
    pub parameters: FilterParameters,
    pub regions: Vec<RegionUpdate>,
}

/// Apply `change` to a copy of `current` and recompute the affected regions.
///
/// Nothing is committed: the caller stores `parameters` only on `Ok`.
pub fn stage_change(
    current: &FilterParameters,
    change: FilterChange,
    records: &[FlightRecord],
    settings: &AggregationSettings,
) -> AggregationResult<StagedChange> {
    let mut parameters = current.clone();
    let input = apply_change(&mut parameters, change)?;
    let regions = recompute_affected(input, records, &parameters, settings)?;
    Ok(StagedChange {
        input,
        parameters,
        regions,
    })
}

/// All five regions, in display order.
pub fn full_dashboard(
    records: &[FlightRecord],
    params: &FilterParameters,
    settings: &AggregationSettings,
) -> AggregationResult<Vec<RegionUpdate>> {
    compute_regions(&View::ALL, records, params, settings)
}
