//! Gap detection.

use crate::types::Series;
use num_traits::Float;

/// Indices whose value is unknown at the moment of the scan, ascending.
///
/// The scan is read-only; the returned sequence defines iteration order for
/// the rest of the pipeline. Fills are computed strictly left-to-right
/// against the progressively updated series, so a gap at index `i` may
/// consume a value interpolated at an earlier index `j < i` in the same
/// pass.
///
/// # Example
///
/// ```
/// use fill_core::engine::detect_gaps;
/// use fill_core::types::{Series, Value};
///
/// let series = Series::from_columns(
///     &[0.0, 1.0, 2.0, 3.0],
///     &[
///         Value::Known(1.0),
///         Value::Unknown,
///         Value::Known(2.0),
///         Value::Unknown,
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(detect_gaps(&series), vec![1, 3]);
/// ```
pub fn detect_gaps<T: Float>(series: &Series<T>) -> Vec<usize> {
    series
        .samples()
        .iter()
        .enumerate()
        .filter(|(_, sample)| sample.value.is_unknown())
        .map(|(index, _)| index)
        .collect()
}
