use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::render::Color;

/// Horizontal tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET_X_PX: f64 = 10.0;
/// Vertical tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET_Y_PX: f64 = -30.0;

/// Pointer position in viewport coordinates plus the page scroll offsets
/// at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll_left: f64, scroll_top: f64) -> Self {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self
    }

    /// Page-relative tooltip anchor as `(left, top)`.
    #[must_use]
    pub fn tooltip_anchor(self) -> (f64, f64) {
        (
            self.scroll_left + self.client_x + TOOLTIP_OFFSET_X_PX,
            self.scroll_top + self.client_y + TOOLTIP_OFFSET_Y_PX,
        )
    }
}

/// Text shown for one hovered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub name: String,
    pub nationality: String,
    pub year: i32,
    pub time: String,
    /// `<br/>` followed by the allegation, or empty for clean records.
    pub allegation: String,
}

impl TooltipContent {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            nationality: record.nationality.clone(),
            year: record.year,
            time: record.time.clone(),
            allegation: record.allegation_text(),
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "{}: {}<br/>Year: {}; Time: {}{}",
            self.name, self.nationality, self.year, self.time, self.allegation
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipState {
    Hidden,
    Visible(TooltipContent),
}

/// The plot's single floating tooltip.
///
/// Position, background, `data-year` and the last content survive a hide so
/// hosts can keep reading the most recently hovered values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    state: TooltipState,
    data_year: i32,
    left: f64,
    top: f64,
    background: Option<Color>,
    last_content: Option<TooltipContent>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            state: TooltipState::Hidden,
            data_year: Self::INITIAL_DATA_YEAR,
            left: 0.0,
            top: 0.0,
            background: None,
            last_content: None,
        }
    }
}

impl Tooltip {
    pub const INITIAL_DATA_YEAR: i32 = 1994;

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible(_))
    }

    #[must_use]
    pub fn data_year(&self) -> i32 {
        self.data_year
    }

    /// Page-relative `(left, top)` of the tooltip box.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Content of the visible or most recently shown record.
    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        self.last_content.as_ref()
    }

    #[must_use]
    pub fn html(&self) -> Option<String> {
        self.last_content.as_ref().map(TooltipContent::to_html)
    }

    pub fn show(&mut self, content: TooltipContent, background: Color, event: PointerEvent) {
        let (left, top) = event.tooltip_anchor();
        self.left = left;
        self.top = top;
        self.background = Some(background);
        self.data_year = content.year;
        self.last_content = Some(content.clone());
        self.state = TooltipState::Visible(content);
    }

    pub fn hide(&mut self) {
        self.state = TooltipState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_applies_offsets_and_scroll() {
        let event = PointerEvent::new(100.0, 200.0).with_scroll(5.0, 40.0);
        assert_eq!(event.tooltip_anchor(), (115.0, 210.0));
    }

    #[test]
    fn hide_keeps_last_values() {
        let mut tooltip = Tooltip::default();
        let record = Record::new(2001, "38:12", 2292, "Rider", "FRA");
        tooltip.show(
            TooltipContent::from_record(&record),
            Color::rgb(0.0, 0.0, 1.0),
            PointerEvent::new(0.0, 0.0),
        );
        tooltip.hide();

        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.data_year(), 2001);
        assert_eq!(
            tooltip.html().as_deref(),
            Some("Rider: FRA<br/>Year: 2001; Time: 38:12")
        );
    }
}
