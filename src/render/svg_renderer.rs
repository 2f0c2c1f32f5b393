use std::fmt::Write;

use crate::error::{PlotError, PlotResult};
use crate::render::{
    AxisOrientation, AxisPrimitive, MarkerPrimitive, RectPrimitive, Renderer, SceneFrame,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub markers_written: usize,
    pub rects_written: usize,
    pub texts_written: usize,
    pub axes_written: usize,
}

/// Serializes a [`SceneFrame`] into a standalone SVG document.
///
/// Element ids, the `dot` class and marker `data-*` attributes are kept so
/// the output can be inspected the same way as the live scene.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last successful render; empty before that.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_frame(out: &mut String, frame: &SceneFrame) -> Result<SvgRenderStats, std::fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="Graph" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;

        let mut stats = SvgRenderStats::default();
        for text in &frame.texts {
            write_text(out, text)?;
            stats.texts_written += 1;
        }
        for marker in &frame.markers {
            write_marker(out, marker)?;
            stats.markers_written += 1;
        }
        for rect in &frame.rects {
            write_rect(out, rect)?;
            stats.rects_written += 1;
        }
        for axis in &frame.axes {
            write_axis(out, axis)?;
            stats.axes_written += 1;
        }

        writeln!(out, "</svg>")?;
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &SceneFrame) -> PlotResult<()> {
        frame.validate()?;

        let mut document = String::new();
        let stats = Self::write_frame(&mut document, frame)
            .map_err(|err| PlotError::Render(format!("failed to write svg document: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    out.push_str("  <text");
    if let Some(id) = &text.id {
        write!(out, r#" id="{}""#, escape_xml(id))?;
    }
    write!(
        out,
        r#" x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}""#,
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        text.color.to_hex(),
        text_anchor(text.h_align),
    )?;
    if text.rotation_deg != 0.0 {
        write!(out, r#" transform="rotate({})""#, num(text.rotation_deg))?;
    }
    writeln!(out, ">{}</text>", escape_xml(&text.text))
}

fn write_marker(out: &mut String, marker: &MarkerPrimitive) -> std::fmt::Result {
    write!(out, r#"  <circle class="{}""#, MarkerPrimitive::CLASS_NAME)?;
    for (name, value) in marker.data_attributes() {
        write!(out, r#" {name}="{}""#, escape_xml(&value))?;
    }
    writeln!(
        out,
        r#" r="{}" cx="{}" cy="{}" fill="{}"/>"#,
        num(marker.radius),
        num(marker.cx),
        num(marker.cy),
        marker.fill.to_hex(),
    )
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill_color.to_hex(),
    )
}

fn write_axis(out: &mut String, axis: &AxisPrimitive) -> std::fmt::Result {
    let stroke = axis.color.to_hex();
    let (start, end) = axis.range;
    let outer = axis.tick_size_px;
    let gap = axis.tick_size_px + axis.tick_padding_px;
    writeln!(
        out,
        r#"  <g id="{}" transform="translate({}, {})" font-size="{}" fill="none">"#,
        escape_xml(&axis.id),
        num(axis.translate_x),
        num(axis.translate_y),
        num(axis.font_size_px),
    )?;

    match axis.orientation {
        AxisOrientation::Bottom => {
            writeln!(
                out,
                r#"    <path class="domain" stroke="{stroke}" d="M{},{}V0H{}V{}"/>"#,
                num(start),
                num(outer),
                num(end),
                num(outer),
            )?;
            for tick in &axis.ticks {
                writeln!(
                    out,
                    r#"    <g class="tick" transform="translate({},0)"><line stroke="{stroke}" y2="{}"/><text fill="{stroke}" y="{}" dy="0.71em" text-anchor="middle">{}</text></g>"#,
                    num(tick.offset),
                    num(axis.tick_size_px),
                    num(gap),
                    escape_xml(&tick.label),
                )?;
            }
        }
        AxisOrientation::Left => {
            writeln!(
                out,
                r#"    <path class="domain" stroke="{stroke}" d="M{},{}H0V{}H{}"/>"#,
                num(-outer),
                num(start),
                num(end),
                num(-outer),
            )?;
            for tick in &axis.ticks {
                writeln!(
                    out,
                    r#"    <g class="tick" transform="translate(0,{})"><line stroke="{stroke}" x2="{}"/><text fill="{stroke}" x="{}" dy="0.32em" text-anchor="end">{}</text></g>"#,
                    num(tick.offset),
                    num(-axis.tick_size_px),
                    num(-gap),
                    escape_xml(&tick.label),
                )?;
            }
        }
    }

    writeln!(out, "  </g>")
}

fn text_anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

/// Compact attribute number: at most three decimals, no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0 + 0.0;
    format!("{rounded}")
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
