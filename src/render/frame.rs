use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{AxisPrimitive, MarkerPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one plot draw pass.
///
/// Draw order is: texts, markers, legend rects, axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub texts: Vec<TextPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub axes: Vec<AxisPrimitive>,
}

impl SceneFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            texts: Vec::new(),
            markers: Vec::new(),
            rects: Vec::new(),
            axes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisPrimitive) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&AxisPrimitive> {
        self.axes.iter().find(|axis| axis.id == id)
    }

    #[must_use]
    pub fn text(&self, id: &str) -> Option<&TextPrimitive> {
        self.texts
            .iter()
            .find(|text| text.id.as_deref() == Some(id))
    }

    /// Marker drawn for the record at `index`, if that record was plotted.
    #[must_use]
    pub fn marker(&self, index: usize) -> Option<&MarkerPrimitive> {
        self.markers.iter().find(|marker| marker.index == index)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for text in &self.texts {
            text.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for axis in &self.axes {
            axis.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
            && self.markers.is_empty()
            && self.rects.is_empty()
            && self.axes.is_empty()
    }
}
