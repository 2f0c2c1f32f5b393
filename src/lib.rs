//! doping-scatter: Alpe d'Huez ascent times plotted against year.
//!
//! The crate turns the published cyclist dataset into a backend-agnostic
//! scene (scales, axes, markers, legend) and drives the hover tooltip.
//! Scenes can be rendered headless, to SVG, or through Cairo.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScatterPlot, ScatterPlotConfig};
pub use error::{PlotError, PlotResult};
