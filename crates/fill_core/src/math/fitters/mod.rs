//! Closed-form point fitters.
//!
//! This module provides the two interpolation primitives of the engine:
//!
//! - [`TwoPointFit`]: the line through two known points
//! - [`ThreePointFit`]: the unique quadratic through three known points,
//!   solved in closed form via Cramer's rule
//!
//! Both fitters are generic over `T: num_traits::Float`, validate their
//! inputs on construction, and report degenerate point sets as errors
//! instead of dividing by zero.
//!
//! ## Example
//!
//! ```
//! use fill_core::math::fitters::{ThreePointFit, TwoPointFit};
//!
//! let line: TwoPointFit<f64> = TwoPointFit::through((0.0, 0.0), (2.0, 4.0)).unwrap();
//! assert!((line.evaluate(1.0) - 2.0).abs() < 1e-12);
//!
//! let parabola: ThreePointFit<f64> = ThreePointFit::through([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]).unwrap();
//! assert!((parabola.evaluate(3.0) - 9.0).abs() < 1e-9);
//! ```

mod linear;
mod quadratic;

// Re-export public types at module level
pub use linear::TwoPointFit;
pub use quadratic::{QuadraticCoeffs, ThreePointFit};
