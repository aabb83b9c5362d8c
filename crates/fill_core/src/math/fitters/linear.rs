//! Two-point line fit.

use crate::types::FillError;
use num_traits::Float;

/// Line through two known points.
///
/// Stores the pair ordered by position and evaluates the interpolation
/// formula
///
/// ```text
/// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
/// ```
///
/// The two points are not required to bracket the query position; a
/// one-sided pair extrapolates along the same line.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use fill_core::math::fitters::TwoPointFit;
///
/// let fit: TwoPointFit<f64> = TwoPointFit::through((1.0, 2.0), (5.0, 10.0)).unwrap();
/// assert!((fit.evaluate(2.0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TwoPointFit<T: Float> {
    /// Lower-position point
    p0: (T, T),
    /// Higher-position point
    p1: (T, T),
}

impl<T: Float> TwoPointFit<T> {
    /// Construct the line through two (position, value) points.
    ///
    /// The points may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(TwoPointFit)` - Successfully constructed fit
    /// * `Err(FillError::CoincidentPositions)` - The points share a position
    ///
    /// # Example
    ///
    /// ```
    /// use fill_core::math::fitters::TwoPointFit;
    ///
    /// assert!(TwoPointFit::through((1.0, 2.0), (1.0, 3.0)).is_err());
    /// ```
    pub fn through(p0: (T, T), p1: (T, T)) -> Result<Self, FillError> {
        if p0.0 == p1.0 {
            return Err(FillError::CoincidentPositions {
                x: p0.0.to_f64().unwrap_or(f64::NAN),
            });
        }

        if p0.0 < p1.0 {
            Ok(Self { p0, p1 })
        } else {
            Ok(Self { p0: p1, p1: p0 })
        }
    }

    /// Evaluate the line at position `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        let (x0, y0) = self.p0;
        let (x1, y1) = self.p1;
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Returns the two points, ordered by position.
    #[inline]
    pub fn points(&self) -> [(T, T); 2] {
        [self.p0, self.p1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_through_rejects_coincident_positions() {
        let result = TwoPointFit::through((2.0, 1.0), (2.0, 5.0));
        assert_eq!(
            result.unwrap_err(),
            FillError::CoincidentPositions { x: 2.0 }
        );
    }

    #[test]
    fn test_through_orders_points_by_position() {
        let fit = TwoPointFit::through((4.0, 8.0), (1.0, 2.0)).unwrap();
        assert_eq!(fit.points(), [(1.0, 2.0), (4.0, 8.0)]);
    }

    #[test]
    fn test_evaluate_at_endpoints() {
        let fit = TwoPointFit::through((1.0, 2.0), (4.0, 8.0)).unwrap();
        assert!((fit.evaluate(1.0) - 2.0).abs() < 1e-12);
        assert!((fit.evaluate(4.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_between_points() {
        // Line through (1, 1) and (4, 5): slope 4/3
        let fit = TwoPointFit::through((1.0, 1.0), (4.0, 5.0)).unwrap();
        assert!((fit.evaluate(2.0) - 7.0 / 3.0).abs() < 1e-12);
        assert!((fit.evaluate(3.0) - 11.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_extrapolates_outside_pair() {
        let fit = TwoPointFit::through((1.0, 2.0), (2.0, 4.0)).unwrap();
        assert!((fit.evaluate(0.0) - 0.0).abs() < 1e-12);
        assert!((fit.evaluate(3.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_negative_slope() {
        let fit = TwoPointFit::through((0.0, 10.0), (5.0, 0.0)).unwrap();
        assert!((fit.evaluate(2.5) - 5.0).abs() < 1e-12);
    }
}
