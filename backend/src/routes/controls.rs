use serde::{Deserialize, Serialize};

use crate::models::DelayMetric;

// =========================================================
// Dashboard controls metadata
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOption {
    pub value: DelayMetric,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Two-ended distance range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial `[low, high]`, never crossing.
    pub default_value: [f64; 2],
    pub marks: Vec<SliderMark>,
}

/// Everything needed to build the three filter widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsData {
    pub metric_options: Vec<MetricOption>,
    pub default_metric: DelayMetric,
    /// Distinct airline display names, sorted.
    pub airline_options: Vec<String>,
    pub default_airlines: Vec<String>,
    pub distance: DistanceSlider,
}

/// Route function name constant for the controls metadata
pub const GET_CONTROLS: &str = "get_controls";
