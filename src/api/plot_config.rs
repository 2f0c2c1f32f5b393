use serde::{Deserialize, Serialize};

use crate::core::{Padding, PlotArea, Viewport};
use crate::data::DEFAULT_DATASET_URL;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 940;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 700;
pub const DEFAULT_HORIZONTAL_PADDING_PX: f64 = 80.0;
pub const DEFAULT_VERTICAL_PADDING_PX: f64 = 100.0;
pub const DEFAULT_MARKER_RADIUS_PX: f64 = 6.0;

/// Fill for records carrying a doping allegation (`#3741ceb4`).
pub const DOPING_ALLEGATION_COLOR: Color = Color::from_rgba8(0x37, 0x41, 0xce, 0xb4);
/// Fill for records without an allegation (`#15dbcbe3`).
pub const NO_ALLEGATION_COLOR: Color = Color::from_rgba8(0x15, 0xdb, 0xcb, 0xe3);

/// Public plot bootstrap configuration.
///
/// Defaults reproduce the published chart exactly; every coordinate in the
/// scene depends on the viewport and padding values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlotConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_padding")]
    pub padding: Padding,
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_doping_color")]
    pub doping_color: Color,
    #[serde(default = "default_clean_color")]
    pub clean_color: Color,
    /// Reject scenes whose year axis has more ticks than fixed labels
    /// instead of leaving the extra ticks blank. On by default in debug
    /// builds.
    #[serde(default = "default_strict_tick_labels")]
    pub strict_tick_labels: bool,
}

impl Default for ScatterPlotConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            padding: default_padding(),
            dataset_url: default_dataset_url(),
            marker_radius_px: default_marker_radius_px(),
            doping_color: default_doping_color(),
            clean_color: default_clean_color(),
            strict_tick_labels: default_strict_tick_labels(),
        }
    }
}

impl ScatterPlotConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.padding = Padding::new(horizontal, vertical);
        self
    }

    #[must_use]
    pub fn with_dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = url.into();
        self
    }

    #[must_use]
    pub fn with_marker_radius_px(mut self, radius: f64) -> Self {
        self.marker_radius_px = radius;
        self
    }

    /// Sets the fills for allegation / no-allegation markers and swatches.
    #[must_use]
    pub fn with_colors(mut self, doping_color: Color, clean_color: Color) -> Self {
        self.doping_color = doping_color;
        self.clean_color = clean_color;
        self
    }

    #[must_use]
    pub fn with_strict_tick_labels(mut self, strict: bool) -> Self {
        self.strict_tick_labels = strict;
        self
    }

    /// Validates the config and returns the padded plot area.
    pub fn plot_area(&self) -> PlotResult<PlotArea> {
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.doping_color.validate()?;
        self.clean_color.validate()?;
        PlotArea::new(self.viewport, self.padding)
    }

    #[must_use]
    pub fn marker_fill(&self, has_doping_allegation: bool) -> Color {
        if has_doping_allegation {
            self.doping_color
        } else {
            self.clean_color
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
}

fn default_padding() -> Padding {
    Padding::new(DEFAULT_HORIZONTAL_PADDING_PX, DEFAULT_VERTICAL_PADDING_PX)
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_owned()
}

fn default_marker_radius_px() -> f64 {
    DEFAULT_MARKER_RADIUS_PX
}

fn default_doping_color() -> Color {
    DOPING_ALLEGATION_COLOR
}

fn default_clean_color() -> Color {
    NO_ALLEGATION_COLOR
}

fn default_strict_tick_labels() -> bool {
    cfg!(debug_assertions)
}
