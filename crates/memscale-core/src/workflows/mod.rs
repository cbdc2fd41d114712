//! # Workflows Module
//!
//! Top-level entry points tying the reference data, the study configuration and the
//! extrapolation engine together.
//!
//! - **Estimate Workflow** ([`estimate`]) - Seeds the extrapolation from the verified
//!   table, extends it over the configured targets and prepares the chart handoff.

pub mod estimate;
