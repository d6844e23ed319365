//! histo-layout: pixel-exact histogram layout engine.
//!
//! The crate computes everything needed to draw a histogram with a cumulative
//! overlay line (band widths, gap-free bucket series, integer bar positions
//! and the normalized integral) and hands it to a pluggable renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{HistogramChart, HistogramConfig};
pub use error::{ChartError, ChartResult};
