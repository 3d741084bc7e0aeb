//! psp-stats - Statistics for personal software process exercises
//!
//! This crate provides the closed-form statistics used by the `psp` tool:
//!
//! - **Summary**: mean, sample variance and sample standard deviation
//! - **Range**: log-normal five-point size ranges (very small .. very large)
//! - **Regression**: Pearson correlation and least-squares line fitting
//!
//! # Numeric Semantics
//!
//! Every statistic is a naive O(n) summation over the series. Degenerate
//! inputs (empty series, a single sample, zero variance, log of a
//! non-positive value) are not errors: they propagate as `NaN` or `inf`
//! exactly as IEEE-754 arithmetic produces them.

pub mod range;
pub mod regression;
pub mod series;
pub mod summary;

pub use range::*;
pub use regression::*;
pub use series::*;
