//! Core series and error types.
//!
//! This module provides:
//! - `series`: the sample series representation (`Series`, `Sample`, `Value`)
//! - `error`: structured error types for series construction and fill operations
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Sample`], [`Series`], [`Value`] from `series`
//! - [`FillError`], [`SeriesError`], [`Side`] from `error`

pub mod error;
pub mod series;

pub use error::{FillError, SeriesError, Side};
pub use series::{Sample, Series, Value};
