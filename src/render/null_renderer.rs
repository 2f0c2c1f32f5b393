use crate::error::PlotResult;
use crate::render::{Renderer, SceneFrame};

/// No-op renderer used by tests and headless plot usage.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_marker_count: usize,
    pub last_text_count: usize,
    pub last_axis_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SceneFrame) -> PlotResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_marker_count = frame.markers.len();
        self.last_text_count = frame.texts.len();
        self.last_axis_count = frame.axes.len();
        Ok(())
    }
}
