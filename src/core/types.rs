use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Symmetric canvas padding in pixels.
///
/// `horizontal` applies to both the left and right edges, `vertical` to
/// both the top and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Pixel rectangle left for data once padding is removed from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn new(viewport: Viewport, padding: Padding) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !padding.horizontal.is_finite()
            || !padding.vertical.is_finite()
            || padding.horizontal < 0.0
            || padding.vertical < 0.0
        {
            return Err(PlotError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        if padding.horizontal * 2.0 >= width || padding.vertical * 2.0 >= height {
            return Err(PlotError::InvalidData(
                "padding leaves no room for the plot area".to_owned(),
            ));
        }

        Ok(Self {
            left: padding.horizontal,
            right: width - padding.horizontal,
            top: padding.vertical,
            bottom: height - padding.vertical,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn horizontal_range(self) -> (f64, f64) {
        (self.left, self.right)
    }

    #[must_use]
    pub fn vertical_range(self) -> (f64, f64) {
        (self.top, self.bottom)
    }
}
