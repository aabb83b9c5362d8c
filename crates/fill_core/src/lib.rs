//! # fill_core
//!
//! Gap-filling interpolation engine for ordered, irregularly-sampled series.
//!
//! Given a series of (position, value) samples in which some values are
//! unknown, the engine fills each gap by a local two-point (linear) or
//! three-point (quadratic) fit and records the provenance of every filled
//! value: the method used, the points consulted, and any fitted
//! coefficients.
//!
//! ## Architecture
//!
//! - [`types`]: the series representation (`Series`, `Sample`, `Value`) and
//!   structured error types.
//! - [`math`]: pure closed-form fitters (`TwoPointFit`, `ThreePointFit`).
//! - [`engine`]: gap detection, neighbor location, per-gap method selection
//!   with fallback, and provenance recording.
//!
//! ## Ordering contract
//!
//! Gaps are filled strictly in ascending index order against the
//! progressively updated series: a value interpolated at index `j` is a
//! legitimate neighbor candidate for any later gap `i > j` within the same
//! pass. The engine holds exclusive ownership of the series for the
//! duration of a pass and retains no state across passes.
//!
//! ## AD-style generics
//!
//! All numeric code is generic over `T: num_traits::Float`, so the engine
//! works with `f64`, `f32`, or any richer float-like type.
//!
//! ## Usage Example
//!
//! ```
//! use fill_core::engine::{fill_series, FillOptions};
//! use fill_core::types::{Series, Value};
//!
//! let mut series = Series::from_columns(
//!     &[1.0, 2.0, 3.0, 4.0, 5.0],
//!     &[
//!         Value::Known(2.0),
//!         Value::Unknown,
//!         Value::Unknown,
//!         Value::Unknown,
//!         Value::Known(10.0),
//!     ],
//! )
//! .unwrap();
//!
//! let outcome = fill_series(&mut series, FillOptions::default());
//!
//! assert_eq!(outcome.len(), 3);
//! assert!(series.value(1).is_known());
//! ```

pub mod engine;
pub mod math;
pub mod types;
