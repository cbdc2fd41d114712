//! # Engine Module
//!
//! The extrapolation engine: study configuration, the coefficient extrapolation
//! itself, progress reporting and engine-level errors.
//!
//! - **Configuration** ([`config`]) - Seeds, targets, palette and chart options for a run
//! - **Extrapolation** ([`extrapolation`]) - Geometric growth of the per-carbon memory coefficient
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Errors surfaced by the workflows

pub mod config;
pub mod error;
pub mod extrapolation;
pub mod progress;
