use serde::{Deserialize, Serialize};

use crate::charts::ChartStyle;
use crate::render::{Color, MarkerPrimitive, MarkerShape, RenderFrame, TextHAlign, TextPrimitive};

/// One legend swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub marker: MarkerShape,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color, marker: MarkerShape) -> Self {
        Self {
            label: label.into(),
            color,
            marker,
        }
    }
}

/// Where a legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPlacement {
    /// Horizontal grid above the plot, expanded to the full plot width.
    AboveExpanded { columns: u32 },
}

impl LegendPlacement {
    /// Number of grid rows needed for `entries` items.
    #[must_use]
    pub fn rows(self, entries: usize) -> usize {
        let Self::AboveExpanded { columns } = self;
        entries.div_ceil(columns.max(1) as usize)
    }
}

/// Row pitch of legend entries.
pub(crate) fn legend_row_height(style: &ChartStyle) -> f64 {
    style.font_size_px * 1.6
}

/// Lays out `entries` in a grid of `columns` spanning `width` from `left`,
/// first row's baseline at `top + row height`.
pub(crate) fn push_legend_grid(
    frame: &mut RenderFrame,
    entries: &[LegendEntry],
    left: f64,
    top: f64,
    width: f64,
    columns: usize,
    style: &ChartStyle,
) {
    let columns = columns.max(1);
    let column_width = width / columns as f64;
    let row_height = legend_row_height(style);

    for (index, entry) in entries.iter().enumerate() {
        let column = index % columns;
        let row = index / columns;
        let x = left + column as f64 * column_width;
        let baseline = top + (row + 1) as f64 * row_height;
        push_entry(frame, entry, x, baseline, style);
    }
}

fn push_entry(frame: &mut RenderFrame, entry: &LegendEntry, x: f64, baseline: f64, style: &ChartStyle) {
    let swatch = style.marker_size_px.max(style.font_size_px * 0.7);
    frame.markers.push(MarkerPrimitive::new(
        x + swatch / 2.0,
        baseline - style.font_size_px * 0.35,
        swatch,
        entry.marker,
        entry.color,
    ));
    if entry.label.is_empty() {
        return;
    }
    frame.texts.push(TextPrimitive::new(
        entry.label.clone(),
        x + swatch + 6.0,
        baseline,
        style.font_size_px,
        style.axis_color,
        TextHAlign::Left,
    ));
}
