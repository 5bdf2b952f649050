use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartStyle;
use crate::charts::axis::{HorizontalAxisSide, push_horizontal_axis};
use crate::core::{Insets, LinearScale, PlotArea, Viewport};
use crate::data::{ComparisonMetric, ComparisonTable};
use crate::error::DashboardResult;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Fraction of each row band covered by its bar.
const BAR_FILL_RATIO: f64 = 0.8;

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub subject: String,
    pub value: f64,
    pub highlighted: bool,
}

/// Horizontal bar chart comparing one metric across subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub metric: ComparisonMetric,
    pub value_label: String,
    pub caption: String,
    pub bars: Vec<Bar>,
    pub bar_color: Color,
    pub highlight_color: Color,
}

impl BarChart {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn highlighted_count(&self) -> usize {
        self.bars.iter().filter(|bar| bar.highlighted).count()
    }

    #[must_use]
    pub fn color_of(&self, bar: &Bar) -> Color {
        if bar.highlighted {
            self.highlight_color
        } else {
            self.bar_color
        }
    }

    /// Lays the chart out inside `viewport`.
    ///
    /// Bars keep table order top to bottom; value ticks sit above the plot.
    pub fn build_render_frame(&self, viewport: Viewport, style: &ChartStyle) -> DashboardResult<RenderFrame> {
        viewport.validate()?;
        let longest_subject = self
            .bars
            .iter()
            .map(|bar| bar.subject.chars().count())
            .max()
            .unwrap_or(0);
        let label_width = (longest_subject as f64 * style.font_size_px * 0.6 + 12.0)
            .min(f64::from(viewport.width) * 0.45);
        let insets = Insets::new(style.font_size_px * 2.0 + 12.0, 24.0, 12.0, label_width);
        let area = PlotArea::inside(viewport, insets)?;
        let scale = self.value_scale()?;

        let mut frame = RenderFrame::new(viewport);
        let ticks = scale.ticks(6);
        push_horizontal_axis(&mut frame, area, scale, &ticks, HorizontalAxisSide::Top, style)?;

        if self.bars.is_empty() {
            return Ok(frame);
        }

        let band = area.height / self.bars.len() as f64;
        let zero_x = scale.to_range(0.0, area.left, area.right())?;
        for (index, bar) in self.bars.iter().enumerate() {
            let band_top = area.top + index as f64 * band;
            let bar_top = band_top + band * (1.0 - BAR_FILL_RATIO) / 2.0;
            let center_y = band_top + band / 2.0;

            if bar.value.is_finite() {
                let value_x = scale.to_range(bar.value, area.left, area.right())?;
                frame.rects.push(RectPrimitive::new(
                    zero_x.min(value_x),
                    bar_top,
                    (value_x - zero_x).abs(),
                    band * BAR_FILL_RATIO,
                    self.color_of(bar),
                ));
            }
            if !bar.subject.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    bar.subject.clone(),
                    area.left - 6.0,
                    center_y + style.font_size_px * 0.35,
                    style.font_size_px,
                    style.axis_color,
                    TextHAlign::Right,
                ));
            }
        }

        Ok(frame)
    }

    fn value_scale(&self) -> DashboardResult<LinearScale> {
        let values = self.bars.iter().map(|bar| bar.value).filter(|v| v.is_finite());
        let (low, high) = values.fold((0.0_f64, 0.0_f64), |(low, high), value| {
            (low.min(value), high.max(value))
        });
        if low == high {
            return LinearScale::new(0.0, 1.0);
        }
        let pad = (high - low) * 0.05;
        LinearScale::new(if low < 0.0 { low - pad } else { low }, high + pad)
    }
}

/// Builds the categorical bar chart for `metric`.
///
/// Every row with the maximum value of the metric is highlighted; an empty
/// table yields an empty chart whose caption reports zero rows.
#[must_use]
pub fn render_bar_chart(
    table: &ComparisonTable,
    metric: ComparisonMetric,
    label: &str,
    style: &ChartStyle,
) -> BarChart {
    let max = table.max_of(metric);
    let bars: Vec<Bar> = table
        .rows()
        .iter()
        .map(|row| {
            let value = metric.value(row);
            Bar {
                subject: row.subject.clone(),
                value,
                highlighted: max.is_some_and(|max| value == max),
            }
        })
        .collect();

    let caption = format!("Showing {} {}: {}", bars.len(), style.subject_noun, label);
    debug!(
        metric = metric.column(),
        rows = bars.len(),
        highlighted = bars.iter().filter(|bar| bar.highlighted).count(),
        "built bar chart"
    );

    BarChart {
        metric,
        value_label: label.to_owned(),
        caption,
        bars,
        bar_color: style.bar_color,
        highlight_color: style.bar_highlight_color,
    }
}
