use wind_dashboard::charts::{ChartPayload, ChartStyle, ChartViewports, render_bar_chart};
use wind_dashboard::core::Viewport;
use wind_dashboard::data::{CompletionStatus, ComparisonMetric, ComparisonRow, ComparisonTable};
use wind_dashboard::page::{DisplaySurface, HtmlSurface};
use wind_dashboard::render::{Color, NullRenderer, Renderer};

fn table(values: &[(&str, f64)]) -> ComparisonTable {
    ComparisonTable::new(
        values
            .iter()
            .map(|(subject, reviews)| {
                ComparisonRow::new(*subject, CompletionStatus::Complete)
                    .with_metric(ComparisonMetric::TotalReviews, *reviews)
            })
            .collect(),
    )
}

#[test]
fn unique_maximum_is_the_only_highlighted_bar() {
    let style = ChartStyle::default();
    let chart = render_bar_chart(
        &table(&[("Gintama", 120.0), ("One Piece", 310.0), ("Haikyuu!!", 90.0)]),
        ComparisonMetric::TotalReviews,
        "Total Number of Reviews",
        &style,
    );

    assert_eq!(chart.row_count(), 3);
    assert_eq!(chart.highlighted_count(), 1);
    let highlighted = chart.bars.iter().find(|bar| bar.highlighted).expect("highlight");
    assert_eq!(highlighted.subject, "One Piece");
    assert_eq!(chart.color_of(highlighted), Color::DODGER_BLUE);
    assert_eq!(chart.color_of(&chart.bars[0]), Color::LIGHT_SKY_BLUE);
}

#[test]
fn tied_maxima_are_all_highlighted() {
    let chart = render_bar_chart(
        &table(&[("A", 5.0), ("B", 5.0), ("C", 1.0)]),
        ComparisonMetric::TotalReviews,
        "Total Number of Reviews",
        &ChartStyle::default(),
    );
    assert_eq!(chart.highlighted_count(), 2);
}

#[test]
fn caption_reports_row_count_and_label() {
    let rows: Vec<(&str, f64)> = vec![
        ("A", 1.0),
        ("B", 2.0),
        ("C", 3.0),
        ("D", 4.0),
        ("E", 5.0),
    ];
    let chart = render_bar_chart(
        &table(&rows),
        ComparisonMetric::TotalReviews,
        "Total Number of Reviews",
        &ChartStyle::default(),
    );
    assert_eq!(chart.caption, "Showing 5 Anime Shows: Total Number of Reviews");
}

#[test]
fn five_rows_emit_one_highlight_and_captioned_figure() {
    let style = ChartStyle::default();
    let chart = render_bar_chart(
        &table(&[
            ("Gintama", 1200.0),
            ("Haikyuu!!", 900.0),
            ("One Piece", 3100.0),
            ("Mushishi", 150.0),
            ("Natsume", 420.0),
        ]),
        ComparisonMetric::TotalReviews,
        "Total Number of Reviews",
        &style,
    );

    assert_eq!(chart.row_count(), 5);
    assert_eq!(chart.highlighted_count(), 1);
    assert!(chart.caption.contains('5'));

    let caption = chart.caption.clone();
    let mut surface = HtmlSurface::new("Comparison", ChartViewports::default(), style);
    surface
        .chart(&ChartPayload::from(chart))
        .expect("emit bar chart");
    assert_eq!(surface.charts_rendered(), 1);

    let html = surface.finish();
    assert!(html.contains(&format!(
        r#"<figcaption class="align-center">{caption}</figcaption>"#
    )));
    // background plus five bars
    assert_eq!(html.matches("<rect").count(), 6);
    let highlight = format!(r#"fill="{}""#, Color::DODGER_BLUE.to_hex());
    assert_eq!(html.matches(&highlight).count(), 1);
}

#[test]
fn empty_table_yields_empty_chart_with_zero_caption() {
    let style = ChartStyle::default();
    let chart = render_bar_chart(
        &ComparisonTable::default(),
        ComparisonMetric::Seasons,
        "Number of Seasons",
        &style,
    );

    assert!(chart.bars.is_empty());
    assert_eq!(chart.highlighted_count(), 0);
    assert!(chart.caption.starts_with("Showing 0"));

    let frame = chart
        .build_render_frame(Viewport::new(1000, 1400), &style)
        .expect("empty chart still lays out");
    assert!(frame.rects.is_empty());
}

#[test]
fn bars_keep_table_order_top_to_bottom() {
    let style = ChartStyle::default();
    let chart = render_bar_chart(
        &table(&[("First", 3.0), ("Second", 1.0), ("Third", 2.0)]),
        ComparisonMetric::TotalReviews,
        "Total Number of Reviews",
        &style,
    );
    let frame = chart
        .build_render_frame(Viewport::new(1000, 1400), &style)
        .expect("frame");

    assert_eq!(frame.rects.len(), 3);
    assert!(frame.rects[0].y < frame.rects[1].y);
    assert!(frame.rects[1].y < frame.rects[2].y);
    assert!(frame.rects[0].width > frame.rects[2].width);
    assert!(frame.texts.iter().any(|text| text.text == "First"));
}

#[test]
fn bar_payload_renders_through_null_renderer() {
    let style = ChartStyle::default();
    let chart: ChartPayload = render_bar_chart(
        &table(&[("A", 10.0), ("B", 20.0)]),
        ComparisonMetric::TotalReviews,
        "Total Number of Reviews",
        &style,
    )
    .into();
    let frame = chart
        .build_render_frame(Viewport::new(800, 600), &style)
        .expect("frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(chart.caption(), Some("Showing 2 Anime Shows: Total Number of Reviews"));
}
