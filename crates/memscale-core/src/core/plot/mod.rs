//! Chart preparation and rendering.
//!
//! [`chart::ChartData`] is the handoff between the estimator and the renderer: three
//! aligned sequences (carbon counts, memory values, labels) plus the boundary
//! between verified and estimated points. [`render`] draws it with `plotters`.

pub mod chart;
pub mod render;
