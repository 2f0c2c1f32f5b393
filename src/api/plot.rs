use crate::core::{PlotArea, Record};
use crate::data::{LoadStatus, PendingLoad};
use crate::error::PlotResult;
use crate::interaction::Tooltip;
use crate::render::Renderer;

use super::ScatterPlotConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `ScatterPlot` owns the loaded record set, the load lifecycle, the single
/// tooltip and the renderer. Scales, ticks and the scene are derived from
/// the record set on every render pass.
pub struct ScatterPlot<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ScatterPlotConfig,
    pub(super) area: PlotArea,
    pub(super) records: Vec<Record>,
    pub(super) load_status: LoadStatus,
    pub(super) pending_load: Option<PendingLoad>,
    pub(super) tooltip: Tooltip,
    pub(super) hovered: Option<usize>,
    pub(super) needs_render: bool,
}

impl<R: Renderer> ScatterPlot<R> {
    pub fn new(renderer: R, config: ScatterPlotConfig) -> PlotResult<Self> {
        let area = config.plot_area()?;
        Ok(Self {
            renderer,
            config,
            area,
            records: Vec::new(),
            load_status: LoadStatus::Idle,
            pending_load: None,
            tooltip: Tooltip::default(),
            hovered: None,
            needs_render: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScatterPlotConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// `true` after data or tooltip changes until the next `render`.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Builds the scene and hands it to the renderer.
    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_scene()?;
        self.renderer.render(&frame)?;
        self.needs_render = false;
        Ok(())
    }

    /// Renders the scene into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_scene()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.needs_render = false;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
