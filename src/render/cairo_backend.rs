use std::f64::consts::PI;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LinePrimitive, Renderer, SceneFrame, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &SceneFrame)
    -> PlotResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an ARGB image surface through `Renderer::render`,
/// or in place on an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the last rendered surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            PlotError::Render(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| PlotError::Render(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &SceneFrame) -> PlotResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for text in &frame.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }

        for marker in &frame.markers {
            context.new_path();
            context.arc(marker.cx, marker.cy, marker.radius, 0.0, 2.0 * PI);
            apply_color(context, marker.fill);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker", err))?;
            stats.markers_drawn += 1;
        }

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for axis in &frame.axes {
            for line in axis.canvas_lines() {
                draw_line(context, line)?;
                stats.lines_drawn += 1;
            }
            for label in axis.canvas_labels() {
                draw_text(context, &label)?;
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &SceneFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &SceneFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_line(context: &Context, line: LinePrimitive) -> PlotResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) -> PlotResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    if text.rotation_deg != 0.0 {
        context.rotate(text.rotation_deg.to_radians());
    }

    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    // Text y is a baseline, pango positions from the top of the layout.
    let (text_width, _text_height) = layout.pixel_size();
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y - baseline);
    pangocairo::functions::show_layout(context, &layout);

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Render(format!("{prefix}: {err}"))
}
