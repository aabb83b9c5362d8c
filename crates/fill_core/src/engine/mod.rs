//! The fill engine.
//!
//! This module wires the pipeline together:
//!
//! - [`gaps`]: read-only scan producing the ascending work list of gaps
//! - [`neighbors`]: candidate selection per interpolation method
//! - [`coordinator`]: per-gap method choice, fallback, and the
//!   [`fill_series`] entry point
//! - [`record`]: provenance records and the fill outcome mapping
//!
//! # Re-exports
//!
//! Commonly used items are re-exported at this module level:
//! - [`fill_series`], [`FillOptions`], [`FillStrategy`] from `coordinator`
//! - [`CandidatePolicy`] from `neighbors`
//! - [`FillMethod`], [`FillOutcome`], [`FillRecord`] from `record`
//! - [`detect_gaps`] from `gaps`

pub mod coordinator;
pub mod gaps;
pub mod neighbors;
pub mod record;

pub use coordinator::{fill_series, FillOptions, FillStrategy};
pub use gaps::detect_gaps;
pub use neighbors::CandidatePolicy;
pub use record::{FillMethod, FillOutcome, FillRecord};
