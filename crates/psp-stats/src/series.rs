//! Sample containers
//!
//! A sample is either a single scalar value or an `(x, y)` pair. Scalars
//! live in a [`StatSeries`], pairs in a [`PairSeries`]. Every statistic in
//! this crate is a symmetric reduction, so the order samples were added in
//! never affects a result.

use serde::{Deserialize, Serialize};

/// An ordered collection of scalar samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSeries {
    values: Vec<f64>,
}

impl StatSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a series from existing values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Append a sample
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the samples in insertion order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

impl FromIterator<f64> for StatSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for StatSeries {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

/// A paired `(x, y)` observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub x: f64,
    pub y: f64,
}

impl Pair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Pair {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered collection of paired samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairSeries {
    pairs: Vec<Pair>,
}

impl PairSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample
    pub fn push(&mut self, pair: impl Into<Pair>) {
        self.pairs.push(pair.into());
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Borrow the samples in insertion order
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().copied()
    }

    /// The x components, in insertion order
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|p| p.x)
    }

    /// The y components, in insertion order
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|p| p.y)
    }
}

impl<P: Into<Pair>> FromIterator<P> for PairSeries {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<Pair>> Extend<P> for PairSeries {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.pairs.extend(iter.into_iter().map(Into::into));
    }
}
