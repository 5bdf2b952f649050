use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartStyle;
use crate::charts::axis::{
    HorizontalAxisSide, push_bottom_title, push_horizontal_axis, push_left_title,
    push_vertical_axis,
};
use crate::charts::legend::{LegendEntry, LegendPlacement, legend_row_height, push_legend_grid};
use crate::core::{Insets, LinearScale, PlotArea, Viewport};
use crate::data::SeasonPolarityTable;
use crate::error::DashboardResult;
use crate::render::{Color, LinePrimitive, MarkerPrimitive, MarkerShape, RenderFrame};

/// Season positions labelled on the horizontal axis.
pub const SEASON_TICKS: [u32; 6] = [0, 1, 2, 3, 4, 5];

/// Columns of the legend grid above the plot.
pub const LEGEND_COLUMNS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub season: u32,
    pub mean_polarity: f64,
}

/// One subject's mean-polarity trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub subject: String,
    pub color: Color,
    pub marker: MarkerShape,
    pub points: Vec<LinePoint>,
}

/// Mean polarity per season, one line per subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub ticks: Vec<u32>,
    pub series: Vec<LineSeries>,
    pub legend_placement: LegendPlacement,
    pub x_label: String,
    pub y_label: String,
}

impl LineChart {
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .map(|series| LegendEntry::new(series.subject.clone(), series.color, series.marker))
            .collect()
    }

    pub fn build_render_frame(&self, viewport: Viewport, style: &ChartStyle) -> DashboardResult<RenderFrame> {
        viewport.validate()?;
        let legend = self.legend();
        let legend_height = self.legend_placement.rows(legend.len()) as f64 * legend_row_height(style);
        let insets = Insets::new(
            legend_height + style.font_size_px * 2.0 + 8.0,
            24.0,
            style.font_size_px * 3.5 + 16.0,
            style.font_size_px * 4.0 + 12.0,
        );
        let area = PlotArea::inside(viewport, insets)?;

        let last_tick = self.ticks.iter().copied().max().unwrap_or(0);
        let last_season = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|point| point.season))
            .max()
            .unwrap_or(0)
            .max(last_tick);
        let x_scale = LinearScale::new(-0.25, f64::from(last_season) + 0.25)?;
        let y_scale = LinearScale::from_extent(
            self.series
                .iter()
                .flat_map(|series| series.points.iter().map(|point| point.mean_polarity)),
            0.1,
            (-1.0, 1.0),
        )?;

        let mut frame = RenderFrame::new(viewport);
        let ticks: Vec<f64> = self.ticks.iter().map(|tick| f64::from(*tick)).collect();
        push_horizontal_axis(&mut frame, area, x_scale, &ticks, HorizontalAxisSide::Bottom, style)?;
        push_vertical_axis(&mut frame, area, y_scale, &y_scale.ticks(6), style)?;
        push_bottom_title(&mut frame, area, &self.x_label, style);
        push_left_title(&mut frame, area, &self.y_label, style);

        for series in &self.series {
            let mut mapped = Vec::with_capacity(series.points.len());
            for point in &series.points {
                let x = x_scale.to_range(f64::from(point.season), area.left, area.right())?;
                let y = y_scale.to_range(point.mean_polarity, area.bottom(), area.top)?;
                mapped.push((x, y));
            }
            for pair in mapped.windows(2) {
                frame.lines.push(LinePrimitive::new(
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1,
                    style.line_width_px,
                    series.color,
                ));
            }
            for (x, y) in mapped {
                frame.markers.push(MarkerPrimitive::new(
                    x,
                    y,
                    style.marker_size_px,
                    series.marker,
                    series.color,
                ));
            }
        }

        let LegendPlacement::AboveExpanded { columns } = self.legend_placement;
        push_legend_grid(&mut frame, &legend, area.left, 4.0, area.width, columns as usize, style);

        Ok(frame)
    }
}

/// Builds the season line chart from a table pre-grouped by (subject, season).
///
/// Subjects keep their first-appearance order and are told apart by color and
/// marker shape. Points are sorted by season; missing seasons are not filled,
/// so a line connects whichever seasons are present.
#[must_use]
pub fn render_line_chart(table: &SeasonPolarityTable, style: &ChartStyle) -> LineChart {
    let mut grouped: IndexMap<&str, Vec<LinePoint>> = IndexMap::new();
    for row in table.rows() {
        grouped.entry(row.subject.as_str()).or_default().push(LinePoint {
            season: row.season,
            mean_polarity: row.mean_polarity,
        });
    }

    let series: Vec<LineSeries> = grouped
        .into_iter()
        .enumerate()
        .map(|(index, (subject, mut points))| {
            points.sort_by_key(|point| point.season);
            LineSeries {
                subject: subject.to_owned(),
                color: style.category_color(index),
                marker: MarkerShape::nth(index),
                points,
            }
        })
        .collect();

    debug!(series = series.len(), rows = table.len(), "built line chart");

    LineChart {
        ticks: SEASON_TICKS.to_vec(),
        series,
        legend_placement: LegendPlacement::AboveExpanded {
            columns: LEGEND_COLUMNS,
        },
        x_label: "Season".to_owned(),
        y_label: "Polarity".to_owned(),
    }
}
