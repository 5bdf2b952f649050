use std::fmt::Write as _;

use indexmap::IndexMap;
#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::axis::{
    HorizontalAxisSide, push_bottom_title, push_horizontal_axis, push_left_title,
    push_vertical_axis,
};
use crate::charts::legend::{LegendEntry, legend_row_height, push_legend_grid};
use crate::charts::ChartStyle;
use crate::core::{Insets, LinearScale, PlotArea, Viewport};
use crate::data::{CompletionStatus, ObservationRow, ObservationTable, SentimentClass};
use crate::error::DashboardResult;
use crate::render::{Color, LinePrimitive, MarkerPrimitive, MarkerShape, RenderFrame};

/// Row count from which per-point hover payloads drop subject and status.
pub const HOVER_DETAIL_ROW_LIMIT: usize = 3000;

/// Inspection data attached to one scatter point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    pub polarity: f64,
    pub subjectivity: f64,
    pub classification: SentimentClass,
    pub season: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CompletionStatus>,
}

impl HoverPayload {
    fn from_row(row: &ObservationRow, include_detail: bool) -> Self {
        Self {
            polarity: row.polarity,
            subjectivity: row.subjectivity,
            classification: row.classification,
            season: row.season,
            record_id: row.record_id,
            subject: include_detail.then(|| row.subject.clone()),
            status: include_detail.then_some(row.status),
        }
    }

    /// Multi-line `name=value` text used as the point tooltip.
    #[must_use]
    pub fn tooltip_text(&self) -> String {
        let mut text = format!(
            "Polarity={}\nSubjectivity={}\nAnalysis={}",
            self.polarity, self.subjectivity, self.classification
        );
        if let Some(subject) = &self.subject {
            let _ = write!(text, "\nAnime={subject}");
        }
        let _ = write!(text, "\nSeason={}", self.season);
        if let Some(status) = self.status {
            let _ = write!(text, "\nDone={status}");
        }
        if let Some(record_id) = self.record_id {
            let _ = write!(text, "\nmal_id={record_id}");
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub polarity: f64,
    pub subjectivity: f64,
    pub classification: SentimentClass,
    pub color: Color,
    pub hover: HoverPayload,
}

/// Vertical guide at a data x position spanning a fraction of the plot
/// height (paper coordinates, 0 = bottom, 1 = top).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub x: f64,
    pub y0_paper: f64,
    pub y1_paper: f64,
}

impl ReferenceLine {
    /// Full-height line at polarity zero.
    pub const ZERO_POLARITY: Self = Self {
        x: 0.0,
        y0_paper: 0.0,
        y1_paper: 1.0,
    };
}

/// Polarity vs subjectivity scatter, colored by classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
    pub reference_line: ReferenceLine,
    pub legend: Vec<LegendEntry>,
    pub hover_detail: bool,
    pub x_label: String,
    pub y_label: String,
}

impl ScatterChart {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.points.len()
    }

    pub fn build_render_frame(&self, viewport: Viewport, style: &ChartStyle) -> DashboardResult<RenderFrame> {
        viewport.validate()?;
        let insets = Insets::new(
            style.font_size_px * 2.0 + 8.0,
            120.0,
            style.font_size_px * 3.5 + 16.0,
            style.font_size_px * 4.0 + 12.0,
        );
        let area = PlotArea::inside(viewport, insets)?;
        let x_scale = LinearScale::from_extent(
            self.points.iter().map(|point| point.polarity),
            0.05,
            (-1.0, 1.0),
        )?
        .including(self.reference_line.x);
        let y_scale = LinearScale::from_extent(
            self.points.iter().map(|point| point.subjectivity),
            0.05,
            (0.0, 1.0),
        )?;

        let mut frame = RenderFrame::new(viewport);
        push_horizontal_axis(
            &mut frame,
            area,
            x_scale,
            &x_scale.ticks(7),
            HorizontalAxisSide::Bottom,
            style,
        )?;
        push_vertical_axis(&mut frame, area, y_scale, &y_scale.ticks(6), style)?;
        push_bottom_title(&mut frame, area, &self.x_label, style);
        push_left_title(&mut frame, area, &self.y_label, style);

        let reference_x = x_scale.to_range(self.reference_line.x, area.left, area.right())?;
        let span = area.height;
        frame.lines.push(LinePrimitive::new(
            reference_x,
            area.bottom() - self.reference_line.y0_paper * span,
            reference_x,
            area.bottom() - self.reference_line.y1_paper * span,
            1.5,
            style.axis_color,
        ));

        frame
            .markers
            .extend(project_points(&self.points, x_scale, y_scale, area, style.marker_size_px)?);

        let legend_left = area.right() + 16.0;
        let legend_top = area.top - legend_row_height(style) + style.font_size_px;
        push_legend_grid(
            &mut frame,
            &self.legend,
            legend_left,
            legend_top,
            f64::from(viewport.width) - legend_left,
            1,
            style,
        );

        Ok(frame)
    }
}

fn project_points(
    points: &[ScatterPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
    size_px: f64,
) -> DashboardResult<Vec<MarkerPrimitive>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<DashboardResult<MarkerPrimitive>> = points
            .par_iter()
            .map(|point| project_single_point(point, x_scale, y_scale, area, size_px))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| project_single_point(point, x_scale, y_scale, area, size_px))
            .collect()
    }
}

fn project_single_point(
    point: &ScatterPoint,
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
    size_px: f64,
) -> DashboardResult<MarkerPrimitive> {
    let x = x_scale.to_range(point.polarity, area.left, area.right())?;
    let y = y_scale.to_range(point.subjectivity, area.bottom(), area.top)?;
    Ok(
        MarkerPrimitive::new(x, y, size_px, MarkerShape::Circle, point.color)
            .with_tooltip(point.hover.tooltip_text()),
    )
}

/// Builds the polarity/subjectivity scatter for `table`.
///
/// Classes get palette colors in order of first appearance. Subject name and
/// status only reach the hover payload below [`HOVER_DETAIL_ROW_LIMIT`] rows.
#[must_use]
pub fn render_scatter_chart(table: &ObservationTable, style: &ChartStyle) -> ScatterChart {
    let include_detail = table.len() < HOVER_DETAIL_ROW_LIMIT;

    let mut class_colors: IndexMap<SentimentClass, Color> = IndexMap::new();
    for row in table.rows() {
        let next = class_colors.len();
        class_colors
            .entry(row.classification)
            .or_insert_with(|| style.category_color(next));
    }

    let points = table
        .rows()
        .iter()
        .map(|row| ScatterPoint {
            polarity: row.polarity,
            subjectivity: row.subjectivity,
            classification: row.classification,
            color: class_colors
                .get(&row.classification)
                .copied()
                .unwrap_or(style.axis_color),
            hover: HoverPayload::from_row(row, include_detail),
        })
        .collect::<Vec<_>>();

    let legend = class_colors
        .iter()
        .map(|(class, color)| LegendEntry::new(class.label(), *color, MarkerShape::Circle))
        .collect();

    debug!(
        rows = points.len(),
        hover_detail = include_detail,
        classes = class_colors.len(),
        "built scatter chart"
    );

    ScatterChart {
        points,
        reference_line: ReferenceLine::ZERO_POLARITY,
        legend,
        hover_detail: include_detail,
        x_label: "Polarity".to_owned(),
        y_label: "Subjectivity".to_owned(),
    }
}
