use tracing::{debug, info};

use crate::charts::{
    BarChart, ChartPayload, LineChart, ScatterChart, render_bar_chart, render_line_chart,
    render_scatter_chart,
};
use crate::data::{ComparisonMetric, DashboardData, StatusFilter};
use crate::error::DashboardResult;
use crate::page::{DisplaySurface, HtmlSurface, Page, render_page};
use crate::render::{NullRenderer, RenderFrame, Renderer, SvgRenderer};

use super::DashboardConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoRenderer;
#[cfg(feature = "cairo-backend")]
use std::path::Path;

/// Main facade consumed by hosts.
///
/// Owns the validated config and the read-only tables; every page and chart
/// entry point borrows them.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    data: DashboardData,
}

impl Dashboard {
    /// Validates `config` and loads both tables from its paths.
    pub fn load(config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        let data = DashboardData::load(&config.comparison_path, &config.observation_path)?;
        Ok(Self { config, data })
    }

    /// Builds a dashboard around already loaded tables.
    pub fn new(config: DashboardConfig, data: DashboardData) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self { config, data })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn render_page<S: DisplaySurface>(
        &self,
        selection: &str,
        surface: &mut S,
    ) -> DashboardResult<Option<Page>> {
        render_page(selection, &self.data, &self.config.asset_dir, surface)
    }

    /// Renders `selection` into a standalone HTML document.
    pub fn render_page_html(&self, selection: &str) -> DashboardResult<String> {
        let mut surface = HtmlSurface::new(
            self.config.page_title.clone(),
            self.config.viewports,
            self.config.chart_style.clone(),
        );
        let page = self.render_page(selection, &mut surface)?;
        info!(
            selection,
            page = page.map(Page::title),
            charts = surface.charts_rendered(),
            "rendered page html"
        );
        Ok(surface.finish())
    }

    /// Bar chart of `metric` over the comparison rows passing `filter`.
    #[must_use]
    pub fn bar_chart(&self, metric: ComparisonMetric, filter: StatusFilter) -> BarChart {
        let table = self.data.comparison.filter_by_status(filter);
        render_bar_chart(&table, metric, metric.label(), &self.config.chart_style)
    }

    /// Polarity/subjectivity scatter, optionally restricted to one subject.
    #[must_use]
    pub fn scatter_chart(&self, subject: Option<&str>) -> ScatterChart {
        match subject {
            Some(subject) => {
                let table = self.data.observations.filter_subject(subject);
                render_scatter_chart(&table, &self.config.chart_style)
            }
            None => render_scatter_chart(&self.data.observations, &self.config.chart_style),
        }
    }

    /// Mean polarity per season for `subjects`; an empty slice keeps all.
    #[must_use]
    pub fn season_line_chart<S: AsRef<str>>(&self, subjects: &[S]) -> LineChart {
        let grouped = if subjects.is_empty() {
            self.data.observations.mean_polarity_by_subject_season()
        } else {
            self.data
                .observations
                .filter_subjects(subjects)
                .mean_polarity_by_subject_season()
        };
        debug!(subjects = subjects.len(), groups = grouped.len(), "season polarity groups");
        render_line_chart(&grouped, &self.config.chart_style)
    }

    /// Projects `chart` into a frame sized by the configured viewport.
    pub fn chart_frame(&self, chart: &ChartPayload) -> DashboardResult<RenderFrame> {
        let viewport = self.config.viewports.for_payload(chart);
        chart.build_render_frame(viewport, &self.config.chart_style)
    }

    /// Renders `chart` through any backend.
    pub fn render_chart<R: Renderer>(
        &self,
        chart: &ChartPayload,
        renderer: &mut R,
    ) -> DashboardResult<()> {
        let frame = self.chart_frame(chart)?;
        renderer.render(&frame)
    }

    /// Validates `chart` geometry without producing output.
    pub fn check_chart(&self, chart: &ChartPayload) -> DashboardResult<NullRenderer> {
        let mut renderer = NullRenderer::default();
        self.render_chart(chart, &mut renderer)?;
        Ok(renderer)
    }

    pub fn chart_svg(&self, chart: &ChartPayload) -> DashboardResult<String> {
        let mut renderer = SvgRenderer::new();
        self.render_chart(chart, &mut renderer)?;
        Ok(renderer.into_svg())
    }

    #[cfg(feature = "cairo-backend")]
    pub fn write_chart_png(&self, chart: &ChartPayload, path: &Path) -> DashboardResult<()> {
        let viewport = self.config.viewports.for_payload(chart);
        let width = i32::try_from(viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(viewport.height).unwrap_or(i32::MAX);
        let mut renderer = CairoRenderer::new(width, height)?;
        self.render_chart(chart, &mut renderer)?;
        renderer.write_png(path)
    }
}
