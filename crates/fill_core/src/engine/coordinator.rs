//! Per-gap method selection and the fill entry point.

use super::gaps::detect_gaps;
use super::neighbors::{bounding_pair, nearest_known, quadratic_candidates, CandidatePolicy};
use super::record::{commit_fill, FillMethod, FillOutcome, FillRecord};
use crate::math::fitters::{ThreePointFit, TwoPointFit};
use crate::types::{FillError, Series};
use num_traits::Float;

/// Fill strategy applied to every gap in a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStrategy {
    /// Two-point fit through the bounding known neighbors; gaps without a
    /// known value on both sides are left unfilled.
    Linear,
    /// Three-point quadratic fit; infeasible gaps are skipped without
    /// fallback.
    Quadratic,
    /// Three-point quadratic fit, falling back to a two-point fit through
    /// the two nearest known points when the quadratic is infeasible.
    #[default]
    QuadraticWithFallback,
}

/// Options for one fill pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillOptions {
    /// Fill strategy applied to every gap.
    pub strategy: FillStrategy,
    /// Candidate selection policy for quadratic fits.
    pub candidates: CandidatePolicy,
}

/// Fill every gap in the series.
///
/// Gaps are detected once, then filled strictly in ascending index order
/// against the progressively updated series: a value interpolated at an
/// earlier index is a legitimate neighbor for later gaps in the same pass.
/// This ordering is part of the contract, not an iteration accident —
/// re-running the fills in another order can consult different points.
///
/// Every per-gap failure is a local decision: an infeasible gap is left
/// unfilled (or falls back, per the strategy) and never aborts the pass.
/// The caller observes only the mutated series and the returned outcome
/// mapping, which holds one [`FillRecord`] per filled index.
///
/// # Example
///
/// ```
/// use fill_core::engine::{fill_series, FillMethod, FillOptions, FillStrategy};
/// use fill_core::types::{Series, Value};
///
/// let mut series = Series::from_columns(
///     &[1.0, 2.0, 3.0, 4.0],
///     &[
///         Value::Known(1.0),
///         Value::Unknown,
///         Value::Unknown,
///         Value::Known(4.0),
///     ],
/// )
/// .unwrap();
///
/// let options = FillOptions {
///     strategy: FillStrategy::Linear,
///     ..FillOptions::default()
/// };
/// let outcome = fill_series(&mut series, options);
///
/// assert_eq!(outcome.get(1).unwrap().method, FillMethod::Linear);
/// assert_eq!(series.value(2).known(), Some(3.0));
/// ```
pub fn fill_series<T: Float>(series: &mut Series<T>, options: FillOptions) -> FillOutcome<T> {
    let mut outcome = FillOutcome::new();
    for index in detect_gaps(series) {
        if let Some(record) = fill_gap(series, index, options) {
            outcome.insert(record);
        }
    }
    outcome
}

/// Attempt one gap; `None` leaves it unfilled.
fn fill_gap<T: Float>(
    series: &mut Series<T>,
    index: usize,
    options: FillOptions,
) -> Option<FillRecord<T>> {
    match options.strategy {
        FillStrategy::Linear => try_linear(series, index).ok(),
        FillStrategy::Quadratic => try_quadratic(series, index, options.candidates).ok(),
        FillStrategy::QuadraticWithFallback => try_quadratic(series, index, options.candidates)
            .or_else(|_| try_fallback(series, index))
            .ok(),
    }
}

/// Snapshot the (position, value) pair at a known index.
fn known_point<T: Float>(series: &Series<T>, index: usize) -> Option<(T, T)> {
    series
        .value(index)
        .known()
        .map(|y| (series.position(index), y))
}

fn try_linear<T: Float>(series: &mut Series<T>, index: usize) -> Result<FillRecord<T>, FillError> {
    let (left, right) = bounding_pair(series, index)?;
    let points = collect_points(series, &[left, right], 2)?;
    let fit = TwoPointFit::through(points[0], points[1])?;
    let value = fit.evaluate(series.position(index));
    Ok(commit_fill(
        series,
        index,
        FillMethod::Linear,
        fit.points().to_vec(),
        value,
        None,
    ))
}

fn try_quadratic<T: Float>(
    series: &mut Series<T>,
    index: usize,
    policy: CandidatePolicy,
) -> Result<FillRecord<T>, FillError> {
    let candidates = quadratic_candidates(series, index, policy);
    let points = collect_points(series, &candidates, 3)?;
    let fit = ThreePointFit::through([points[0], points[1], points[2]])?;
    let value = fit.evaluate(series.position(index));
    Ok(commit_fill(
        series,
        index,
        FillMethod::Quadratic,
        fit.points().to_vec(),
        value,
        Some(fit.coefficients()),
    ))
}

/// Two-point fit through the two nearest known points, bracketing or not.
fn try_fallback<T: Float>(
    series: &mut Series<T>,
    index: usize,
) -> Result<FillRecord<T>, FillError> {
    let pair = nearest_known(series, index, 2);
    let points = collect_points(series, &pair, 2)?;
    let fit = TwoPointFit::through(points[0], points[1])?;
    let value = fit.evaluate(series.position(index));
    Ok(commit_fill(
        series,
        index,
        FillMethod::LinearFallback,
        fit.points().to_vec(),
        value,
        None,
    ))
}

fn collect_points<T: Float>(
    series: &Series<T>,
    candidates: &[usize],
    need: usize,
) -> Result<Vec<(T, T)>, FillError> {
    let points: Vec<(T, T)> = candidates
        .iter()
        .filter_map(|&j| known_point(series, j))
        .collect();
    if points.len() < need {
        return Err(FillError::InsufficientCandidates {
            got: points.len(),
            need,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;
    use approx::assert_relative_eq;

    fn series(values: &[Option<f64>]) -> Series<f64> {
        let positions: Vec<f64> = (1..=values.len()).map(|i| i as f64).collect();
        let values: Vec<Value<f64>> = values
            .iter()
            .map(|v| match v {
                Some(y) => Value::Known(*y),
                None => Value::Unknown,
            })
            .collect();
        Series::from_columns(&positions, &values).unwrap()
    }

    fn known(series: &Series<f64>, index: usize) -> f64 {
        series.value(index).known().expect("value should be filled")
    }

    fn options(strategy: FillStrategy) -> FillOptions {
        FillOptions {
            strategy,
            ..FillOptions::default()
        }
    }

    // ========================================
    // Linear strategy
    // ========================================

    #[test]
    fn test_linear_fill_lies_on_neighbor_line() {
        // Positions 1..=4, values [1, _, _, 4]
        let mut s = series(&[Some(1.0), None, None, Some(4.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::Linear));

        assert_eq!(outcome.len(), 2);
        assert_relative_eq!(known(&s, 1), 2.0, epsilon = 1e-9);
        assert_relative_eq!(known(&s, 2), 3.0, epsilon = 1e-9);
        assert_eq!(outcome.get(1).unwrap().method, FillMethod::Linear);
    }

    #[test]
    fn test_linear_fill_consumes_previously_filled_neighbor() {
        let mut s = series(&[Some(1.0), None, None, Some(4.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::Linear));

        // Index 2's nearest left known is index 1, which was itself filled
        // moments earlier in the same pass. The record proves the live
        // value was consulted, not the original gap.
        let record = outcome.get(2).unwrap();
        assert_eq!(record.points, vec![(2.0, 2.0), (4.0, 4.0)]);
    }

    #[test]
    fn test_linear_leaves_boundary_gaps_unfilled() {
        let mut s = series(&[None, Some(1.0), Some(2.0), None]);
        let original = s.clone();
        let outcome = fill_series(&mut s, options(FillStrategy::Linear));

        assert!(outcome.is_empty());
        assert_eq!(s, original);
    }

    // ========================================
    // Quadratic strategy (no fallback)
    // ========================================

    #[test]
    fn test_quadratic_skips_gap_with_two_candidates() {
        let mut s = series(&[Some(1.0), None, None, Some(4.0)]);
        let original = s.clone();
        let outcome = fill_series(&mut s, options(FillStrategy::Quadratic));

        assert!(outcome.is_empty());
        assert_eq!(s, original);
    }

    #[test]
    fn test_quadratic_fills_interior_gap() {
        // y = x² at positions 1, 2, 4; gap at 3
        let mut s = series(&[Some(1.0), Some(4.0), None, Some(16.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::Quadratic));

        assert_relative_eq!(known(&s, 2), 9.0, epsilon = 1e-9);
        let record = outcome.get(2).unwrap();
        assert_eq!(record.method, FillMethod::Quadratic);
        let coeffs = record.coefficients.unwrap();
        assert_relative_eq!(coeffs.a, 1.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs.b, 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs.c, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic_extrapolates_one_sided_trailing_gap() {
        // y = (x + 1)² known at positions 1, 2, 3; trailing gap at 4
        let mut s = series(&[Some(4.0), Some(9.0), Some(16.0), None]);
        let outcome = fill_series(&mut s, options(FillStrategy::Quadratic));

        assert_relative_eq!(known(&s, 3), 25.0, epsilon = 1e-9);
        assert_eq!(outcome.get(3).unwrap().method, FillMethod::Quadratic);
    }

    // ========================================
    // Quadratic with fallback
    // ========================================

    #[test]
    fn test_end_to_end_boundary_pair() {
        // Positions 1..=5, values [2, _, _, _, 10].
        // The first gap sees only two knowns and falls back to the line
        // through them; every later gap then finds three collinear
        // candidates and the quadratic reproduces the same line.
        let mut s = series(&[Some(2.0), None, None, None, Some(10.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::QuadraticWithFallback));

        assert_eq!(outcome.len(), 3);
        assert_relative_eq!(known(&s, 1), 4.0, epsilon = 1e-9);
        assert_relative_eq!(known(&s, 2), 6.0, epsilon = 1e-9);
        assert_relative_eq!(known(&s, 3), 8.0, epsilon = 1e-9);

        let first = outcome.get(1).unwrap();
        assert_eq!(first.method, FillMethod::LinearFallback);
        assert_eq!(first.points, vec![(1.0, 2.0), (5.0, 10.0)]);
        assert!(first.coefficients.is_none());

        let second = outcome.get(2).unwrap();
        assert_eq!(second.method, FillMethod::Quadratic);
        assert_eq!(second.points, vec![(1.0, 2.0), (2.0, 4.0), (5.0, 10.0)]);
        let coeffs = second.coefficients.unwrap();
        assert_relative_eq!(coeffs.a, 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs.b, 2.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs.c, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fill_order_escalates_method() {
        // Positions 1..=4, values [1, _, _, 5]. The first gap has only two
        // known candidates and falls back to a line; once it is filled, the
        // second gap gathers three candidates and succeeds with the
        // quadratic. A pass over frozen original knowns would have used
        // linear-fallback for both — the escalation is the observable
        // order dependence.
        let mut s = series(&[Some(1.0), None, None, Some(5.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::QuadraticWithFallback));

        let first = outcome.get(1).unwrap();
        assert_eq!(first.method, FillMethod::LinearFallback);
        assert_relative_eq!(first.value, 7.0 / 3.0, epsilon = 1e-12);

        let second = outcome.get(2).unwrap();
        assert_eq!(second.method, FillMethod::Quadratic);
        assert_relative_eq!(second.value, 11.0 / 3.0, epsilon = 1e-12);
        // The just-filled value at position 2 is among the consulted points
        assert!(second
            .points
            .iter()
            .any(|&(x, y)| x == 2.0 && (y - 7.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_fallback_requires_two_known_points() {
        let mut s = series(&[None, Some(5.0), None]);
        let original = s.clone();
        let outcome = fill_series(&mut s, options(FillStrategy::QuadraticWithFallback));

        assert!(outcome.is_empty());
        assert_eq!(s, original);
    }

    #[test]
    fn test_candidate_policies_disagree_near_cluster() {
        let positions = [0.0, 1.0, 2.0, 3.0, 10.0];
        let values = [
            Value::Known(1.0),
            Value::Known(4.0),
            Value::Known(9.0),
            Value::Unknown,
            Value::Known(100.0),
        ];

        // Side-balanced: candidates at positions 2, 1, 10
        let mut balanced = Series::from_columns(&positions, &values).unwrap();
        let outcome = fill_series(
            &mut balanced,
            FillOptions {
                strategy: FillStrategy::QuadraticWithFallback,
                candidates: CandidatePolicy::SideBalanced,
            },
        );
        assert_relative_eq!(outcome.get(3).unwrap().value, 185.0 / 12.0, epsilon = 1e-9);

        // Global-nearest: candidates at positions 2, 1, 0 fit y = (x + 1)²
        let mut global = Series::from_columns(&positions, &values).unwrap();
        let outcome = fill_series(
            &mut global,
            FillOptions {
                strategy: FillStrategy::QuadraticWithFallback,
                candidates: CandidatePolicy::GlobalNearest,
            },
        );
        assert_relative_eq!(outcome.get(3).unwrap().value, 16.0, epsilon = 1e-9);
    }

    // ========================================
    // Pass-level properties
    // ========================================

    #[test]
    fn test_idempotent_on_fully_filled_series() {
        let mut s = series(&[Some(2.0), None, None, None, Some(10.0)]);
        fill_series(&mut s, options(FillStrategy::QuadraticWithFallback));

        let filled = s.clone();
        let rerun = fill_series(&mut s, options(FillStrategy::QuadraticWithFallback));
        assert!(rerun.is_empty());
        assert_eq!(s, filled);
    }

    #[test]
    fn test_no_gaps_is_a_noop() {
        let mut s = series(&[Some(1.0), Some(2.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::Linear));
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_unfillable_gap_does_not_abort_the_rest() {
        // Leading gap has no left neighbor under Linear, but the interior
        // gap still gets filled.
        let mut s = series(&[None, Some(2.0), None, Some(4.0)]);
        let outcome = fill_series(&mut s, options(FillStrategy::Linear));

        assert_eq!(outcome.len(), 1);
        assert!(s.value(0).is_unknown());
        assert_relative_eq!(known(&s, 2), 3.0, epsilon = 1e-9);
    }
}
