//! Bivariate statistics over paired samples
//!
//! Pearson correlation and the least-squares regression line
//! `y = β₀ + β₁·x`. All quantities are derived from the raw sums
//! `Σx, Σy, Σxy, Σx², Σy²`; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::series::PairSeries;
use crate::summary::mean_of;

/// Raw sums over a paired series, accumulated in one pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairSums {
    pub n: f64,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_xx: f64,
    pub sum_yy: f64,
}

impl PairSums {
    pub fn from_series(series: &PairSeries) -> Self {
        series.iter().fold(Self::default(), |acc, p| Self {
            n: acc.n + 1.0,
            sum_x: acc.sum_x + p.x,
            sum_y: acc.sum_y + p.y,
            sum_xy: acc.sum_xy + p.x * p.y,
            sum_xx: acc.sum_xx + p.x * p.x,
            sum_yy: acc.sum_yy + p.y * p.y,
        })
    }
}

/// A fitted regression line `y = intercept + gradient·x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    /// β₀
    pub intercept: f64,
    /// β₁
    pub gradient: f64,
}

impl RegressionLine {
    /// Estimate y for the given x
    pub fn estimate(&self, x: f64) -> f64 {
        self.intercept + self.gradient * x
    }
}

impl PairSeries {
    /// Mean of the x components
    pub fn mean_x(&self) -> f64 {
        mean_of(self.xs())
    }

    /// Mean of the y components
    pub fn mean_y(&self) -> f64 {
        mean_of(self.ys())
    }

    /// Pearson correlation coefficient r
    ///
    /// `r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)·(n·Σy² − (Σy)²))`
    ///
    /// Zero variance in either component gives a zero denominator, so the
    /// result is `NaN` or `±inf`.
    pub fn correlation(&self) -> f64 {
        let s = PairSums::from_series(self);
        let left = s.n * s.sum_xx - s.sum_x * s.sum_x;
        let right = s.n * s.sum_yy - s.sum_y * s.sum_y;
        let num = s.n * s.sum_xy - s.sum_x * s.sum_y;
        num / (left * right).sqrt()
    }

    /// Coefficient of determination, r²
    pub fn r_squared(&self) -> f64 {
        let r = self.correlation();
        r * r
    }

    /// Least-squares gradient β₁ = (Σxy − n·x̄·ȳ) / (Σx² − n·x̄²)
    pub fn regression_gradient(&self) -> f64 {
        let s = PairSums::from_series(self);
        let x_avg = s.sum_x / s.n;
        let y_avg = s.sum_y / s.n;
        let num = s.sum_xy - s.n * x_avg * y_avg;
        let den = s.sum_xx - s.n * x_avg * x_avg;
        num / den
    }

    /// Least-squares intercept β₀ = ȳ − x̄·β₁
    pub fn regression_intercept(&self) -> f64 {
        self.mean_y() - self.mean_x() * self.regression_gradient()
    }

    /// Estimate y at `x` from the regression line, β₀ + β₁·x
    pub fn regression_estimate(&self, x: f64) -> f64 {
        self.regression_line().estimate(x)
    }

    pub fn regression_line(&self) -> RegressionLine {
        RegressionLine {
            intercept: self.regression_intercept(),
            gradient: self.regression_gradient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear() -> PairSeries {
        vec![(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)].into_iter().collect()
    }

    #[test]
    fn test_pair_sums() {
        let s = PairSums::from_series(&linear());
        assert_eq!(s.n, 3.0);
        assert_eq!(s.sum_x, 6.0);
        assert_eq!(s.sum_y, 12.0);
        assert_eq!(s.sum_xy, 28.0);
        assert_eq!(s.sum_xx, 14.0);
        assert_eq!(s.sum_yy, 56.0);
    }

    #[test]
    fn test_perfect_line() {
        let series = linear();
        assert_eq!(series.mean_x(), 2.0);
        assert_eq!(series.mean_y(), 4.0);
        assert!((series.regression_gradient() - 2.0).abs() < 1e-12);
        assert!(series.regression_intercept().abs() < 1e-12);
        assert!((series.correlation() - 1.0).abs() < 1e-12);
        assert!((series.regression_estimate(10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_correlation() {
        let series: PairSeries = vec![(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)].into_iter().collect();
        assert!((series.correlation() + 1.0).abs() < 1e-12);
        assert!((series.r_squared() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_x_is_not_finite() {
        let series: PairSeries = vec![(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)].into_iter().collect();
        assert!(!series.regression_gradient().is_finite());
        assert!(!series.correlation().is_finite());
    }

    #[test]
    fn test_empty_series_is_nan() {
        let series = PairSeries::new();
        assert!(series.mean_x().is_nan());
        assert!(series.regression_gradient().is_nan());
        assert!(series.correlation().is_nan());
    }
}
