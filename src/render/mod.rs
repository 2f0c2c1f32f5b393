mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::SceneFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisOrientation, AxisPrimitive, AxisTick, Color, LinePrimitive, MarkerBinding,
    MarkerPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `SceneFrame` so
/// drawing code stays isolated from data loading and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &SceneFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
