//! Summary statistics for scalar series
//!
//! Provides the univariate statistics:
//! - Mean
//! - Sample variance and standard deviation (Bessel's correction, `n - 1`)
//! - In-place natural log transform

use crate::series::StatSeries;

/// Arithmetic mean of a sequence of values.
///
/// Returns `NaN` for an empty sequence (`0 / 0`).
pub(crate) fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let (count, sum) = values.fold((0usize, 0.0), |(n, s), v| (n + 1, s + v));
    sum / count as f64
}

impl StatSeries {
    /// Arithmetic mean of the samples
    ///
    /// An empty series yields `NaN`.
    pub fn mean(&self) -> f64 {
        mean_of(self.iter())
    }

    /// Unbiased sample variance: `Σ(v - mean)² / (n - 1)`
    ///
    /// A single sample yields `NaN` (`0 / 0`). An empty series also yields
    /// `NaN`; the bare formula would otherwise produce `-0.0` there.
    pub fn sample_variance(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum: f64 = self.iter().map(|v| (v - mean) * (v - mean)).sum();
        sum / (self.len() as f64 - 1.0)
    }

    /// Sample standard deviation, `sqrt(sample_variance)`
    pub fn sample_stdev(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    /// Replace every sample with its natural logarithm.
    ///
    /// Zero becomes `-inf` and negative values become `NaN`; neither is
    /// reported as an error.
    pub fn ln_transform(&mut self) {
        for value in self.values_mut() {
            *value = value.ln();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> StatSeries {
        StatSeries::from_values(values.to_vec())
    }

    #[test]
    fn test_mean_basic() {
        let s = series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.mean() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_basic() {
        let s = series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.sample_variance() - 32.0 / 7.0).abs() < 1e-12);
        assert!((s.sample_stdev() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_series_is_nan() {
        let s = StatSeries::new();
        assert!(s.mean().is_nan());
        assert!(s.sample_variance().is_nan());
        assert!(s.sample_stdev().is_nan());
    }

    #[test]
    fn test_single_sample() {
        let s = series(&[42.0]);
        assert_eq!(s.mean(), 42.0);
        assert!(s.sample_variance().is_nan());
    }

    #[test]
    fn test_ln_transform() {
        let mut s = series(&[1.0, std::f64::consts::E, 0.0, -1.0]);
        s.ln_transform();
        let v = s.values();
        assert_eq!(v[0], 0.0);
        assert!((v[1] - 1.0).abs() < 1e-15);
        assert_eq!(v[2], f64::NEG_INFINITY);
        assert!(v[3].is_nan());
    }
}
