#![cfg(feature = "cairo-backend")]

use wind_dashboard::charts::ChartPayload;
use wind_dashboard::data::{
    CompletionStatus, ComparisonMetric, ComparisonRow, ComparisonTable, DashboardData,
    ObservationRow, ObservationTable, StatusFilter,
};
use wind_dashboard::render::CairoRenderer;
use wind_dashboard::{Dashboard, DashboardConfig, DashboardError};

fn dashboard() -> Dashboard {
    let data = DashboardData::new(
        ComparisonTable::new(vec![
            ComparisonRow::new("Gintama", CompletionStatus::Complete)
                .with_metric(ComparisonMetric::TotalReviews, 120.0),
            ComparisonRow::new("One Piece", CompletionStatus::Ongoing)
                .with_metric(ComparisonMetric::TotalReviews, 310.0),
        ]),
        ObservationTable::new(vec![
            ObservationRow::new("Gintama", 1, 0.2, 0.5, CompletionStatus::Complete),
            ObservationRow::new("Gintama", 2, -0.1, 0.3, CompletionStatus::Complete),
        ]),
    );
    Dashboard::new(DashboardConfig::default(), data).expect("dashboard")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, DashboardError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_bar_chart_primitives() {
    let dashboard = dashboard();
    let chart: ChartPayload = dashboard
        .bar_chart(ComparisonMetric::TotalReviews, StatusFilter::Any)
        .into();
    let mut renderer = CairoRenderer::new(1000, 1400).expect("renderer");
    dashboard.render_chart(&chart, &mut renderer).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 2);
    assert!(stats.lines_drawn > 0);
    assert!(stats.texts_drawn >= 2);
}

#[test]
fn chart_png_is_written_to_disk() {
    let dashboard = dashboard();
    let chart: ChartPayload = dashboard.season_line_chart::<&str>(&[]).into();
    let path = std::env::temp_dir().join(format!("wind-dashboard-line-{}.png", std::process::id()));

    dashboard.write_chart_png(&chart, &path).expect("png");
    let bytes = std::fs::read(&path).expect("read png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
