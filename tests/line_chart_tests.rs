use std::fs;

use approx::assert_relative_eq;
use wind_dashboard::charts::{
    ChartPayload, ChartStyle, ChartViewports, LEGEND_COLUMNS, LegendPlacement, SEASON_TICKS,
    render_line_chart,
};
use wind_dashboard::core::Viewport;
use wind_dashboard::data::{
    CompletionStatus, ObservationRow, ObservationTable, SeasonPolarity, SeasonPolarityTable,
};
use wind_dashboard::page::{DisplaySurface, HtmlSurface};
use wind_dashboard::render::{MarkerShape, NullRenderer, Renderer};

fn grid(subjects: &[&str], seasons: &[u32]) -> SeasonPolarityTable {
    subjects
        .iter()
        .flat_map(|subject| {
            seasons
                .iter()
                .map(move |season| SeasonPolarity::new(*subject, *season, f64::from(*season) / 10.0))
        })
        .collect()
}

#[test]
fn one_series_per_subject_with_one_point_per_season() {
    let chart = render_line_chart(&grid(&["A", "B"], &[0, 1, 2]), &ChartStyle::default());

    assert_eq!(chart.series.len(), 2);
    assert!(chart.series.iter().all(|series| series.points.len() == 3));
    assert_eq!(chart.ticks, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(chart.ticks, SEASON_TICKS.to_vec());
    assert_eq!(chart.x_label, "Season");
    assert_eq!(chart.y_label, "Polarity");
}

#[test]
fn subjects_differ_by_color_and_marker() {
    let chart = render_line_chart(&grid(&["A", "B", "C"], &[1]), &ChartStyle::default());

    assert_ne!(chart.series[0].color, chart.series[1].color);
    assert_eq!(chart.series[0].marker, MarkerShape::Circle);
    assert_ne!(chart.series[0].marker, chart.series[1].marker);
    assert_ne!(chart.series[1].marker, chart.series[2].marker);
}

#[test]
fn legend_is_expanded_grid_above_plot() {
    let chart = render_line_chart(&grid(&["A", "B"], &[1]), &ChartStyle::default());
    assert_eq!(
        chart.legend_placement,
        LegendPlacement::AboveExpanded {
            columns: LEGEND_COLUMNS
        }
    );
    let labels: Vec<String> = chart.legend().into_iter().map(|entry| entry.label).collect();
    assert_eq!(labels, vec!["A".to_owned(), "B".to_owned()]);
}

#[test]
fn subject_order_follows_input_and_points_sort_by_season() {
    let table = SeasonPolarityTable::new(vec![
        SeasonPolarity::new("Zeta", 3, 0.3),
        SeasonPolarity::new("Alpha", 1, 0.1),
        SeasonPolarity::new("Zeta", 1, -0.2),
    ]);
    let chart = render_line_chart(&table, &ChartStyle::default());

    assert_eq!(chart.series[0].subject, "Zeta");
    assert_eq!(chart.series[1].subject, "Alpha");
    let seasons: Vec<u32> = chart.series[0].points.iter().map(|point| point.season).collect();
    assert_eq!(seasons, vec![1, 3]);
}

#[test]
fn empty_table_yields_no_series_but_fixed_ticks() {
    let style = ChartStyle::default();
    let chart = render_line_chart(&SeasonPolarityTable::default(), &style);
    assert!(chart.series.is_empty());
    assert_eq!(chart.ticks.len(), 6);

    let frame = chart
        .build_render_frame(Viewport::new(1000, 500), &style)
        .expect("frame");
    assert!(frame.markers.is_empty());
    for tick in ["0", "1", "2", "3", "4", "5"] {
        assert!(frame.texts.iter().any(|text| text.text == tick), "missing tick {tick}");
    }
}

#[test]
fn grouped_observations_feed_line_chart_means() {
    let observations = ObservationTable::new(vec![
        ObservationRow::new("Gintama", 1, 0.2, 0.5, CompletionStatus::Complete),
        ObservationRow::new("Gintama", 1, 0.4, 0.5, CompletionStatus::Complete),
        ObservationRow::new("Gintama", 2, -0.1, 0.5, CompletionStatus::Complete),
        ObservationRow::new("Haikyuu!!", 1, 0.5, 0.5, CompletionStatus::Ongoing),
    ]);
    let grouped = observations
        .filter_subjects(&["Gintama"])
        .mean_polarity_by_subject_season();
    let chart = render_line_chart(&grouped, &ChartStyle::default());

    assert_eq!(chart.series.len(), 1);
    let points = &chart.series[0].points;
    assert_eq!(points.len(), 2);
    assert_relative_eq!(points[0].mean_polarity, 0.3, epsilon = 1e-12);
    assert_relative_eq!(points[1].mean_polarity, -0.1, epsilon = 1e-12);
}

#[test]
fn frame_draws_one_segment_between_consecutive_points() {
    let style = ChartStyle::default();
    let chart = render_line_chart(&grid(&["A"], &[1, 2, 3]), &style);
    let frame = chart
        .build_render_frame(Viewport::new(1000, 500), &style)
        .expect("frame");

    let color = chart.series[0].color;
    let segments = frame.lines.iter().filter(|line| line.color == color).count();
    assert_eq!(segments, 2);
    // 3 points plus 1 legend swatch
    assert_eq!(frame.markers.len(), 3 + 1);
}

#[test]
fn blank_subject_from_csv_still_renders() {
    let dir = std::env::temp_dir().join(format!("wind-dashboard-line-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("blank_subject.csv");
    fs::write(
        &path,
        "\
,Anime,Season,Polarity,Subjectivity,Analysis,Done,mal_id
0,,1,0.1,0.4,Positive,Done,
1,Gintama,1,0.3,0.5,Positive,Done,918
",
    )
    .expect("write csv");

    let observations = ObservationTable::load(&path).expect("load");
    let style = ChartStyle::default();
    let chart = render_line_chart(&observations.mean_polarity_by_subject_season(), &style);
    assert_eq!(chart.series.len(), 2);

    let frame = chart
        .build_render_frame(Viewport::new(1000, 500), &style)
        .expect("frame");
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_ok());
    assert!(frame.texts.iter().all(|text| !text.text.is_empty()));

    let mut surface = HtmlSurface::new("Blank", ChartViewports::default(), style);
    surface
        .chart(&ChartPayload::from(chart))
        .expect("html chart");
    assert_eq!(surface.charts_rendered(), 1);
}
