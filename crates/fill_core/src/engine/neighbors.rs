//! Neighbor location for gap filling.
//!
//! Two selection policies exist, one per filler:
//!
//! - *Linear mode* ([`bounding_pair`]): walk outward from the gap until a
//!   known value is found on each side.
//! - *Quadratic mode* ([`quadratic_candidates`]): rank known indices by
//!   absolute position distance from the gap and gather up to three, either
//!   side-balanced or globally nearest depending on [`CandidatePolicy`].
//!
//! All lookups are evaluated against the live series, so values filled
//! earlier in the same pass are legitimate candidates.

use crate::types::{FillError, Series, Side};
use num_traits::Float;

/// Nearest known index strictly left of `index`, if any.
#[inline]
pub fn nearest_known_left<T: Float>(series: &Series<T>, index: usize) -> Option<usize> {
    (0..index).rev().find(|&j| series.value(j).is_known())
}

/// Nearest known index strictly right of `index`, if any.
#[inline]
pub fn nearest_known_right<T: Float>(series: &Series<T>, index: usize) -> Option<usize> {
    (index + 1..series.len()).find(|&j| series.value(j).is_known())
}

/// Bounding known neighbors for a linear fill.
///
/// # Returns
///
/// * `Ok((left, right))` - Nearest known indices on each side
/// * `Err(FillError::MissingBound)` - One side has no known value
///
/// # Example
///
/// ```
/// use fill_core::engine::neighbors::bounding_pair;
/// use fill_core::types::{Series, Value};
///
/// let series = Series::from_columns(
///     &[0.0, 1.0, 2.0, 3.0],
///     &[
///         Value::Known(1.0),
///         Value::Unknown,
///         Value::Unknown,
///         Value::Known(4.0),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(bounding_pair(&series, 2).unwrap(), (0, 3));
/// ```
pub fn bounding_pair<T: Float>(
    series: &Series<T>,
    index: usize,
) -> Result<(usize, usize), FillError> {
    let left = nearest_known_left(series, index).ok_or(FillError::MissingBound {
        index,
        side: Side::Left,
    })?;
    let right = nearest_known_right(series, index).ok_or(FillError::MissingBound {
        index,
        side: Side::Right,
    })?;
    Ok((left, right))
}

/// Candidate selection policy for the quadratic fit.
///
/// Two divergent policies exist in the wild; they can disagree on which
/// three points are chosen (and therefore on the fitted value) when the gap
/// sits near a one-sided cluster of known values. `SideBalanced` is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidatePolicy {
    /// Up to two nearest known points per side, padded left-first from the
    /// remaining candidates until three are gathered or both sides are
    /// exhausted.
    #[default]
    SideBalanced,
    /// The three known points nearest in position, regardless of side.
    GlobalNearest,
}

/// The `count` known indices nearest in position to the gap at `index`.
///
/// Ranked by absolute position distance; ties resolve to the leftmost
/// candidate. Intended for gap indices, whose own value is unknown and
/// therefore never among the results.
pub fn nearest_known<T: Float>(series: &Series<T>, index: usize, count: usize) -> Vec<usize> {
    let x = series.position(index);
    let mut ranked: Vec<usize> = series.known_indices().collect();
    ranked.sort_by(|&a, &b| {
        let da = (series.position(a) - x).abs();
        let db = (series.position(b) - x).abs();
        da.partial_cmp(&db)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    ranked.truncate(count);
    ranked
}

/// Up to three candidate indices for a quadratic fill at `index`.
///
/// Returns fewer than three only when the series does not hold enough known
/// values. The candidates are evaluated against the live series.
pub fn quadratic_candidates<T: Float>(
    series: &Series<T>,
    index: usize,
    policy: CandidatePolicy,
) -> Vec<usize> {
    match policy {
        CandidatePolicy::SideBalanced => side_balanced(series, index),
        CandidatePolicy::GlobalNearest => nearest_known(series, index, 3),
    }
}

/// Two nearest per side, then pad left-first.
///
/// Positions are strictly increasing, so walking outward by index visits
/// each side's known values in increasing position distance.
fn side_balanced<T: Float>(series: &Series<T>, index: usize) -> Vec<usize> {
    let left: Vec<usize> = (0..index)
        .rev()
        .filter(|&j| series.value(j).is_known())
        .collect();
    let right: Vec<usize> = (index + 1..series.len())
        .filter(|&j| series.value(j).is_known())
        .collect();

    let mut picked: Vec<usize> = Vec::with_capacity(4);
    picked.extend(left.iter().take(2).copied());
    picked.extend(right.iter().take(2).copied());

    let mut extra_left = left.iter().skip(2).copied();
    let mut extra_right = right.iter().skip(2).copied();
    while picked.len() < 3 {
        if let Some(j) = extra_left.next() {
            picked.push(j);
        } else if let Some(j) = extra_right.next() {
            picked.push(j);
        } else {
            break;
        }
    }

    picked.truncate(3);
    picked
}
