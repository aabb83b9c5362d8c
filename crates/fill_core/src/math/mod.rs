//! Numerical building blocks.
//!
//! This module provides the closed-form point fitters used by the fill
//! engine. The fitters are pure: they know nothing about series, gaps, or
//! fill order, and can be used standalone.

pub mod fitters;
