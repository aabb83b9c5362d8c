//! Three-point quadratic fit via closed-form Cramer solve.

use crate::types::FillError;
use num_traits::Float;

/// Coefficients of the fitted parabola `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoeffs<T> {
    /// Quadratic coefficient
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Constant term
    pub c: T,
}

/// The unique quadratic through three known points.
///
/// Solves the 3x3 linear system for `(a, b, c)` in closed form using
/// Cramer's rule over the three points' positions and values:
///
/// ```text
/// det   = x0²(x1−x2) + x0(x2²−x1²) + (x1²·x2 − x2²·x1)
/// det_a = y0(x1−x2) + y1(x2−x0) + y2(x0−x1)
/// det_b = x0²(y1−y2) + y0(x2²−x1²) + x1²·y2 − x2²·y1
/// det_c = x0²(x1·y2 − x2·y1) + x0(x2²·y1 − x1²·y2) + y0(x1²·x2 − x2²·x1)
/// ```
///
/// Input points may be given in any order; they are reordered by position
/// internally so the determinant computation is deterministic. A point set
/// with fewer than two distinct positions, or with a zero determinant, is
/// rejected as degenerate rather than divided through.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use fill_core::math::fitters::ThreePointFit;
///
/// let fit: ThreePointFit<f64> = ThreePointFit::through([(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]).unwrap();
/// let coeffs = fit.coefficients();
/// assert!((coeffs.a - 1.0).abs() < 1e-9);
/// assert!((fit.evaluate(4.0) - 16.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThreePointFit<T: Float> {
    /// The fitted points, ordered by position
    points: [(T, T); 3],
    /// Solved coefficients
    coeffs: QuadraticCoeffs<T>,
}

impl<T: Float> ThreePointFit<T> {
    /// Construct the quadratic through three (position, value) points.
    ///
    /// # Returns
    ///
    /// * `Ok(ThreePointFit)` - Successfully solved fit
    /// * `Err(FillError::SingularSystem)` - Fewer than two distinct
    ///   positions, or the system determinant is zero
    ///
    /// # Example
    ///
    /// ```
    /// use fill_core::math::fitters::ThreePointFit;
    ///
    /// // Duplicate positions cannot determine a quadratic
    /// let result = ThreePointFit::through([(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    /// assert!(result.is_err());
    /// ```
    pub fn through(points: [(T, T); 3]) -> Result<Self, FillError> {
        let mut pts = points;
        pts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let (x0, y0) = pts[0];
        let (x1, y1) = pts[1];
        let (x2, y2) = pts[2];

        let singular = || FillError::SingularSystem {
            x0: x0.to_f64().unwrap_or(f64::NAN),
            x1: x1.to_f64().unwrap_or(f64::NAN),
            x2: x2.to_f64().unwrap_or(f64::NAN),
        };

        // Fewer than two distinct positions cannot even determine a line.
        if x0 == x2 {
            return Err(singular());
        }

        let det = x0 * x0 * (x1 - x2) + x0 * (x2 * x2 - x1 * x1) + (x1 * x1 * x2 - x2 * x2 * x1);
        if det == T::zero() {
            return Err(singular());
        }

        let det_a = y0 * (x1 - x2) + y1 * (x2 - x0) + y2 * (x0 - x1);
        let det_b =
            x0 * x0 * (y1 - y2) + y0 * (x2 * x2 - x1 * x1) + x1 * x1 * y2 - x2 * x2 * y1;
        let det_c = x0 * x0 * (x1 * y2 - x2 * y1)
            + x0 * (x2 * x2 * y1 - x1 * x1 * y2)
            + y0 * (x1 * x1 * x2 - x2 * x2 * x1);

        let coeffs = QuadraticCoeffs {
            a: det_a / det,
            b: det_b / det,
            c: det_c / det,
        };

        Ok(Self {
            points: pts,
            coeffs,
        })
    }

    /// Evaluate the fitted quadratic at position `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        let QuadraticCoeffs { a, b, c } = self.coeffs;
        a * x * x + b * x + c
    }

    /// Returns the solved coefficients.
    #[inline]
    pub fn coefficients(&self) -> QuadraticCoeffs<T> {
        self.coeffs
    }

    /// Returns the three fitted points, ordered by position.
    #[inline]
    pub fn points(&self) -> [(T, T); 3] {
        self.points
    }
}
