//! Public API surface for the flight delay backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{AirlineSelection, DelayMetric, DistanceRange, FilterParameters};
pub use crate::routes::controls::ControlsData;
pub use crate::routes::controls::DistanceSlider;
pub use crate::routes::controls::MetricOption;
pub use crate::routes::controls::SliderMark;
pub use crate::routes::delay_histogram::DelayHistogramBin;
pub use crate::routes::delay_histogram::DelayHistogramData;
pub use crate::routes::destination_map::DestinationMapData;
pub use crate::routes::destination_map::DestinationPoint;
pub use crate::routes::distance_heatmap::DistanceDelayCell;
pub use crate::routes::distance_heatmap::DistanceHeatmapData;
pub use crate::routes::origin::OriginSummary;
pub use crate::routes::origin::OriginSummaryData;
pub use crate::routes::profile::AirlineCount;
pub use crate::routes::profile::ColumnProfile;
pub use crate::routes::profile::ColumnStats;
pub use crate::routes::profile::DatasetProfile;
pub use crate::routes::summary::ScalarSummary;
pub use crate::routes::summary::SummaryData;
pub use crate::routes::summary::SummaryTile;
pub use crate::services::dispatch::{
    ChartRegion, FilterChange, FilterInput, RegionUpdate, View, ViewPayload,
};
