use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::error::{PlotError, PlotResult};
use crate::interaction::{PointerEvent, TooltipContent};
use crate::render::Renderer;

use super::ScatterPlot;

impl<R: Renderer> ScatterPlot<R> {
    /// Shows the tooltip for the record behind marker `index`.
    ///
    /// `index` is a record index that must have a plotted marker; records
    /// whose time does not parse are rejected.
    pub fn pointer_enter(&mut self, index: usize, event: PointerEvent) -> PlotResult<()> {
        let record = self.records.get(index).ok_or_else(|| {
            PlotError::InvalidData(format!(
                "marker index {index} is out of range for {} records",
                self.records.len()
            ))
        })?;
        record.parsed_time().map_err(|err| {
            PlotError::InvalidData(format!("record {index} has no plotted marker: {err}"))
        })?;

        let background = self.config.marker_fill(record.has_doping_allegation());
        let content = TooltipContent::from_record(record);
        trace!(index, year = content.year, "tooltip shown");
        self.tooltip.show(content, background, event);
        self.hovered = Some(index);
        self.needs_render = true;
        Ok(())
    }

    pub fn pointer_leave(&mut self) {
        if self.tooltip.is_visible() {
            trace!("tooltip hidden");
        }
        self.tooltip.hide();
        self.hovered = None;
        self.needs_render = true;
    }

    /// Marker under a canvas point, preferring the closest center and then
    /// the marker drawn last.
    pub fn hit_test(&self, x: f64, y: f64) -> PlotResult<Option<usize>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PlotError::InvalidData(
                "hit-test point must be finite".to_owned(),
            ));
        }

        let scales = self.scales()?;
        Ok(self
            .project_markers(scales)
            .iter()
            .filter(|marker| marker.contains(x, y))
            .min_by_key(|marker| (OrderedFloat(marker.distance_to(x, y)), Reverse(marker.index)))
            .map(|marker| marker.binding.index))
    }

    /// Pointer motion for hosts without per-element events.
    ///
    /// `(x, y)` is in canvas coordinates and is hit-tested against the
    /// markers; `event` carries the viewport position used to place the
    /// tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64, event: PointerEvent) -> PlotResult<()> {
        match (self.hit_test(x, y)?, self.hovered) {
            (Some(hit), Some(current)) if hit == current => Ok(()),
            (Some(hit), _) => self.pointer_enter(hit, event),
            (None, Some(_)) => {
                self.pointer_leave();
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }

    /// Record index currently under the pointer.
    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }
}
