//! Data-driven chart renderers.
//!
//! Each renderer is a pure function from a table (plus [`ChartStyle`]) to a
//! serializable chart payload. Payloads project into backend-agnostic
//! [`RenderFrame`]s for any [`crate::render::Renderer`].

mod axis;
mod bar;
mod json_contract;
mod legend;
mod line;
mod scatter;
mod style;

pub use bar::{Bar, BarChart, render_bar_chart};
pub use json_contract::{CHART_PAYLOAD_JSON_SCHEMA_V1, ChartPayloadJsonContractV1};
pub use legend::{LegendEntry, LegendPlacement};
pub use line::{LEGEND_COLUMNS, LineChart, LinePoint, LineSeries, SEASON_TICKS, render_line_chart};
pub use scatter::{
    HOVER_DETAIL_ROW_LIMIT, HoverPayload, ReferenceLine, ScatterChart, ScatterPoint,
    render_scatter_chart,
};
pub use style::ChartStyle;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::DashboardResult;
use crate::render::RenderFrame;

/// Canvas size used for each chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewports {
    #[serde(default = "default_bar_viewport")]
    pub bar: Viewport,
    #[serde(default = "default_scatter_viewport")]
    pub scatter: Viewport,
    #[serde(default = "default_line_viewport")]
    pub line: Viewport,
}

impl Default for ChartViewports {
    fn default() -> Self {
        Self {
            bar: default_bar_viewport(),
            scatter: default_scatter_viewport(),
            line: default_line_viewport(),
        }
    }
}

impl ChartViewports {
    #[must_use]
    pub fn for_payload(&self, chart: &ChartPayload) -> Viewport {
        match chart {
            ChartPayload::Bar(_) => self.bar,
            ChartPayload::Scatter(_) => self.scatter,
            ChartPayload::Line(_) => self.line,
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.bar.validate()?;
        self.scatter.validate()?;
        self.line.validate()
    }
}

fn default_bar_viewport() -> Viewport {
    Viewport::new(1000, 1400)
}

fn default_scatter_viewport() -> Viewport {
    Viewport::new(700, 400)
}

fn default_line_viewport() -> Viewport {
    Viewport::new(1000, 500)
}

/// Any chart the display surface can show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPayload {
    Bar(BarChart),
    Scatter(ScatterChart),
    Line(LineChart),
}

impl ChartPayload {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Scatter(_) => "scatter",
            Self::Line(_) => "line",
        }
    }

    /// Caption displayed under the chart, if the chart carries one.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::Bar(chart) => Some(&chart.caption),
            Self::Scatter(_) | Self::Line(_) => None,
        }
    }

    pub fn build_render_frame(&self, viewport: Viewport, style: &ChartStyle) -> DashboardResult<RenderFrame> {
        match self {
            Self::Bar(chart) => chart.build_render_frame(viewport, style),
            Self::Scatter(chart) => chart.build_render_frame(viewport, style),
            Self::Line(chart) => chart.build_render_frame(viewport, style),
        }
    }
}

impl From<BarChart> for ChartPayload {
    fn from(chart: BarChart) -> Self {
        Self::Bar(chart)
    }
}

impl From<ScatterChart> for ChartPayload {
    fn from(chart: ScatterChart) -> Self {
        Self::Scatter(chart)
    }
}

impl From<LineChart> for ChartPayload {
    fn from(chart: LineChart) -> Self {
        Self::Line(chart)
    }
}
