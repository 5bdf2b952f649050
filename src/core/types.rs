use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

    pub fn validate(self) -> DashboardResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DashboardError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Pixel margins reserved around the plot area for axes, legends and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Rectangle inside a viewport where series geometry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Shrinks the viewport by `insets`.
    ///
    /// Fails when the viewport is empty or the insets leave no drawable area.
    pub fn inside(viewport: Viewport, insets: Insets) -> DashboardResult<Self> {
        viewport.validate()?;
        let width = f64::from(viewport.width) - insets.left - insets.right;
        let height = f64::from(viewport.height) - insets.top - insets.bottom;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(DashboardError::InvalidData(format!(
                "insets leave no plot area inside {}x{} viewport",
                viewport.width, viewport.height
            )));
        }
        Ok(Self {
            left: insets.left,
            top: insets.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
