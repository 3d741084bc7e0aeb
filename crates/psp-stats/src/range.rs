//! Log-normal size ranges
//!
//! Size and effort data are modelled as log-normal: the range boundaries
//! are `exp(mean ± k·stdev)` for `k` in `{0, 1, 2}`, where mean and stdev
//! are taken over the natural logs of the samples.

use serde::{Deserialize, Serialize};

use crate::series::StatSeries;

/// Five-point size range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PertRange {
    pub very_small: f64,
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub very_large: f64,
}

impl PertRange {
    /// Build the range from the mean and standard deviation of log data
    pub fn from_log_moments(mean: f64, stdev: f64) -> Self {
        Self {
            very_small: (mean - 2.0 * stdev).exp(),
            small: (mean - stdev).exp(),
            medium: mean.exp(),
            large: (mean + stdev).exp(),
            very_large: (mean + 2.0 * stdev).exp(),
        }
    }

    /// Boundaries from very small to very large
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.very_small,
            self.small,
            self.medium,
            self.large,
            self.very_large,
        ]
    }
}

impl StatSeries {
    /// Compute the log-normal size range of the samples.
    ///
    /// This log-transforms the series in place before taking its moments,
    /// so afterwards the series holds `ln(x)` rather than `x`. Callers that
    /// query `mean` or `sample_variance` after this call observe log-space
    /// values. Use [`StatSeries::log_range`] to leave the series untouched.
    pub fn pert_range(&mut self) -> PertRange {
        self.ln_transform();
        PertRange::from_log_moments(self.mean(), self.sample_stdev())
    }

    /// Same as [`StatSeries::pert_range`], computed on a transformed copy.
    pub fn log_range(&self) -> PertRange {
        self.clone().pert_range()
    }
}
