use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> PlotResult<Self> {
        let invalid = || PlotError::InvalidData(format!("invalid hex color `{input}`"));
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return Err(invalid());
        }

        let channel = |offset: usize| {
            u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|_| invalid())
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Lowercase `#rrggbbaa`; the alpha pair is omitted when fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [red, green, blue, alpha] = self.to_rgba8();
        if alpha == 255 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(PlotError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle in pixel space; used for legend swatches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(PlotError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `rotation_deg` rotates the whole coordinate system around the canvas
/// origin before `x`/`y` are applied, the same way an SVG `rotate()`
/// transform does.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub id: Option<String>,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            id: None,
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Hover/leave wiring carried by each marker.
///
/// Hosts forward pointer events for a marker to
/// `ScatterPlot::pointer_enter(binding.index, ..)` and
/// `ScatterPlot::pointer_leave()` without querying the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerBinding {
    pub index: usize,
}

/// One plotted record.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPrimitive {
    /// Position of the source record in the loaded record set.
    pub index: usize,
    pub year: i32,
    /// `Seconds` of the source record as an ISO-8601 instant.
    pub iso_timestamp: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub binding: MarkerBinding,
}

impl MarkerPrimitive {
    pub const CLASS_NAME: &'static str = "dot";

    /// Externally inspectable `data-*` attributes in document order.
    #[must_use]
    pub fn data_attributes(&self) -> IndexMap<&'static str, String> {
        let mut attributes = IndexMap::with_capacity(3);
        attributes.insert("data-index", self.index.to_string());
        attributes.insert("data-xvalue", self.year.to_string());
        attributes.insert("data-yvalue", self.iso_timestamp.clone());
        attributes
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) <= self.radius
    }

    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.cx).hypot(y - self.cy)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(PlotError::InvalidData(format!(
                "marker {} center must be finite",
                self.index
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One labelled reference mark; `offset` is along the axis, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

impl AxisTick {
    #[must_use]
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

/// Axis group drawn in its own coordinate system.
///
/// Tick offsets and `range` are expressed before `translate_*` is applied:
/// a bottom axis lays ticks out along x at y = 0, a left axis along y at
/// x = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPrimitive {
    pub id: String,
    pub orientation: AxisOrientation,
    pub translate_x: f64,
    pub translate_y: f64,
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl AxisPrimitive {
    /// Domain line and tick lines in canvas coordinates.
    #[must_use]
    pub fn canvas_lines(&self) -> Vec<LinePrimitive> {
        let mut lines = Vec::with_capacity(self.ticks.len() + 1);
        let (start, end) = self.range;
        let tx = self.translate_x;
        let ty = self.translate_y;
        match self.orientation {
            AxisOrientation::Bottom => {
                lines.push(LinePrimitive::new(tx + start, ty, tx + end, ty, 1.0, self.color));
                for tick in &self.ticks {
                    let x = tx + tick.offset;
                    lines.push(LinePrimitive::new(x, ty, x, ty + self.tick_size_px, 1.0, self.color));
                }
            }
            AxisOrientation::Left => {
                lines.push(LinePrimitive::new(tx, ty + start, tx, ty + end, 1.0, self.color));
                for tick in &self.ticks {
                    let y = ty + tick.offset;
                    lines.push(LinePrimitive::new(tx - self.tick_size_px, y, tx, y, 1.0, self.color));
                }
            }
        }
        lines
    }

    /// Tick labels in canvas coordinates, skipping empty labels.
    #[must_use]
    pub fn canvas_labels(&self) -> Vec<TextPrimitive> {
        let gap = self.tick_size_px + self.tick_padding_px;
        self.ticks
            .iter()
            .filter(|tick| !tick.label.is_empty())
            .map(|tick| match self.orientation {
                AxisOrientation::Bottom => TextPrimitive::new(
                    tick.label.clone(),
                    self.translate_x + tick.offset,
                    self.translate_y + gap + self.font_size_px,
                    self.font_size_px,
                    self.color,
                    TextHAlign::Center,
                ),
                AxisOrientation::Left => TextPrimitive::new(
                    tick.label.clone(),
                    self.translate_x - gap,
                    self.translate_y + tick.offset + self.font_size_px * 0.32,
                    self.font_size_px,
                    self.color,
                    TextHAlign::Right,
                ),
            })
            .collect()
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.translate_x.is_finite()
            || !self.translate_y.is_finite()
            || !self.range.0.is_finite()
            || !self.range.1.is_finite()
        {
            return Err(PlotError::InvalidData(format!(
                "axis `{}` geometry must be finite",
                self.id
            )));
        }
        if let Some(tick) = self.ticks.iter().find(|tick| !tick.offset.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "axis `{}` tick `{}` has a non-finite offset",
                self.id, tick.label
            )));
        }
        if !self.tick_size_px.is_finite()
            || !self.tick_padding_px.is_finite()
            || !self.font_size_px.is_finite()
            || self.font_size_px <= 0.0
        {
            return Err(PlotError::InvalidData(format!(
                "axis `{}` tick metrics must be finite",
                self.id
            )));
        }
        self.color.validate()
    }
}
