//! # memscale
//!
//! Estimates the per-core memory a B3LYP/6-31G** calculation in Orca needs for
//! increasingly large coronene-family molecules (C6n²H6n). A per-carbon memory
//! coefficient is derived from a handful of verified runs and extrapolated
//! geometrically to larger molecules; verified and estimated values are then
//! plotted side by side.
//!
//! - **[`core`]**: stateless data models, the verified reference table, palettes and
//!   chart rendering.
//! - **[`engine`]**: configuration, the extrapolation algorithm and progress reporting.
//! - **[`workflows`]**: the end-to-end estimation run used by the CLI.
//!
//! ```
//! use memscale::core::dataset::ReferenceDataset;
//! use memscale::engine::extrapolation::extend;
//!
//! let dataset = ReferenceDataset::default();
//! let result = extend(dataset.seeds(3), &[150, 216]).unwrap();
//! assert_eq!(result.estimated()[0].label(), "C150H30");
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
