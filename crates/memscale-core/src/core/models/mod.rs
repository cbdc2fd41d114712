//! # Core Models Module
//!
//! Data structures describing the molecules and memory measurements the estimator
//! works with.
//!
//! - [`formula`] - Coronene-family molecular formula and its display label
//! - [`sample`] - Verified and estimated molecule/memory pairs

pub mod formula;
pub mod sample;
