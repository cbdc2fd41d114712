//! # Core Module
//!
//! Stateless building blocks of the memory estimator.
//!
//! - **Molecular Representation** ([`models`]) - Formulas and verified/estimated samples
//! - **Reference Data** ([`dataset`]) - The verified memory table measured with Orca
//! - **Colors** ([`palette`]) - Point colors cycled by sample index
//! - **Charts** ([`plot`]) - Chart handoff data and SVG rendering

pub mod dataset;
pub mod models;
pub mod palette;
pub mod plot;
