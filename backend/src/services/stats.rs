//! Shared numeric helpers for the aggregation views.

use std::cmp::Ordering;

use crate::routes::profile::ColumnStats;

/// Tolerance for comparing aggregated floating-point values.
pub const EPSILON: f64 = 1e-9;

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Compute count, mean, median, population standard deviation, min, max and sum.
/// An empty slice yields all zeros.
pub fn compute_stats(values: &[f64]) -> ColumnStats {
    if values.is_empty() {
        return ColumnStats {
            count: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sum: 0.0,
        };
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    ColumnStats {
        count,
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[count - 1],
        sum,
    }
}

/// Fractional rank of every value within the slice, in (0, 1].
///
/// Ties share the average of their 1-based ranks before dividing by the
/// number of values.
pub fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // 1-based ranks i+1 ..= j+1 share their mean
        let average_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = average_rank / n as f64;
        }
        i = j + 1;
    }
    ranks
}

/// Equal-width partition of `[start, start + width * count]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualWidthBins {
    pub start: f64,
    pub width: f64,
    pub count: usize,
    stop: f64,
}

impl EqualWidthBins {
    /// Bins spanning the observed range of `values`. A range collapsed to a
    /// single value is widened to `[v, v + 1]`. `None` when there are no values
    /// or `count` is zero.
    pub fn spanning(values: impl IntoIterator<Item = f64>, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        let max = if min == max { min + 1.0 } else { max };
        Some(Self {
            start: min,
            width: (max - min) / count as f64,
            count,
            stop: max,
        })
    }

    /// Exact upper edge of the last bin.
    pub fn end(&self) -> f64 {
        self.stop
    }

    /// Bin holding `value`; out-of-range values clamp to the first or last bin.
    pub fn index_of(&self, value: f64) -> usize {
        let raw = ((value - self.start) / self.width).floor();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.count - 1)
        }
    }

    pub fn bounds(&self, index: usize) -> (f64, f64) {
        let lo = self.start + index as f64 * self.width;
        let hi = if index + 1 == self.count {
            self.end()
        } else {
            self.start + (index + 1) as f64 * self.width
        };
        (lo, hi)
    }

    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = (0..self.count).map(|i| self.bounds(i).0).collect();
        edges.push(self.end());
        edges
    }
}
