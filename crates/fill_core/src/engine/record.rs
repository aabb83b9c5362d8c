//! Fill provenance records and the outcome mapping.

use std::collections::BTreeMap;
use std::fmt;

use crate::math::fitters::QuadraticCoeffs;
use crate::types::Series;
use num_traits::Float;

/// Method that produced a filled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMethod {
    /// Two-point fit through the bounding known neighbors.
    Linear,
    /// Three-point closed-form quadratic fit.
    Quadratic,
    /// Two-point fit substituted after an infeasible quadratic.
    LinearFallback,
}

impl FillMethod {
    /// Stable lower-case name, suitable for reports.
    pub fn name(&self) -> &'static str {
        match self {
            FillMethod::Linear => "linear",
            FillMethod::Quadratic => "quadratic",
            FillMethod::LinearFallback => "linear-fallback",
        }
    }
}

impl fmt::Display for FillMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Provenance for one filled index.
///
/// `points` snapshots the consulted (position, value) pairs at the moment
/// of use; later fills in the same pass may overwrite the live series at
/// those indices, but the record keeps what was actually read.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRecord<T> {
    /// Index that was filled.
    pub index: usize,
    /// Position of the filled sample.
    pub position: T,
    /// Method that produced the value.
    pub method: FillMethod,
    /// The (position, value) pairs consulted, ordered by position.
    pub points: Vec<(T, T)>,
    /// The interpolated value written back into the series.
    pub value: T,
    /// Solved coefficients of `value = a·position² + b·position + c`;
    /// present only for quadratic fills.
    pub coefficients: Option<QuadraticCoeffs<T>>,
}

/// Ordered index → record mapping produced by one fill pass.
///
/// Indices that could not be filled are simply absent; they retain the
/// unknown marker in the series.
///
/// # Example
///
/// ```
/// use fill_core::engine::{fill_series, FillOptions};
/// use fill_core::types::{Series, Value};
///
/// let mut series = Series::from_columns(
///     &[0.0, 1.0, 2.0],
///     &[Value::Known(0.0), Value::Unknown, Value::Known(4.0)],
/// )
/// .unwrap();
///
/// let outcome = fill_series(&mut series, FillOptions::default());
/// assert!(outcome.get(1).is_some());
/// assert_eq!(outcome.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FillOutcome<T> {
    records: BTreeMap<usize, FillRecord<T>>,
}

impl<T> FillOutcome<T> {
    pub(crate) fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, record: FillRecord<T>) {
        self.records.insert(record.index, record);
    }

    /// Returns the record for `index`, if that gap was filled.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&FillRecord<T>> {
        self.records.get(&index)
    }

    /// Returns the number of filled gaps.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no gap was filled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FillRecord<T>)> {
        self.records.iter().map(|(&index, record)| (index, record))
    }
}

/// Write `value` into the series at `index` and build the record.
///
/// Pure bookkeeping: the point list must already be snapshotted by the
/// caller (values read from the series before this write).
pub(crate) fn commit_fill<T: Float>(
    series: &mut Series<T>,
    index: usize,
    method: FillMethod,
    points: Vec<(T, T)>,
    value: T,
    coefficients: Option<QuadraticCoeffs<T>>,
) -> FillRecord<T> {
    series.set_value(index, value);
    FillRecord {
        index,
        position: series.position(index),
        method,
        points,
        value,
        coefficients,
    }
}
