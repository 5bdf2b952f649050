use proptest::prelude::*;
use wind_dashboard::charts::{
    ChartStyle, HOVER_DETAIL_ROW_LIMIT, render_bar_chart, render_line_chart, render_scatter_chart,
};
use wind_dashboard::core::Viewport;
use wind_dashboard::data::{
    CompletionStatus, ComparisonMetric, ComparisonRow, ComparisonTable, ObservationRow,
    ObservationTable,
};
use wind_dashboard::render::{NullRenderer, Renderer};

fn observation_rows() -> impl Strategy<Value = Vec<ObservationRow>> {
    prop::collection::vec(
        (0u8..6u8, 0u32..8u32, -1.0f64..1.0f64, 0.0f64..1.0f64, any::<bool>()),
        0..96,
    )
    .prop_map(|samples| {
        samples
            .into_iter()
            .map(|(subject, season, polarity, subjectivity, done)| {
                let status = if done {
                    CompletionStatus::Complete
                } else {
                    CompletionStatus::Ongoing
                };
                ObservationRow::new(format!("Show {subject}"), season, polarity, subjectivity, status)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn bar_chart_highlights_exactly_the_maxima(
        values in prop::collection::vec(0.0f64..10_000.0f64, 0..64)
    ) {
        let table = ComparisonTable::new(
            values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    ComparisonRow::new(format!("Show {index}"), CompletionStatus::Complete)
                        .with_metric(ComparisonMetric::HelpfulVotesTotal, *value)
                })
                .collect(),
        );
        let style = ChartStyle::default();
        let chart = render_bar_chart(&table, ComparisonMetric::HelpfulVotesTotal, "Total", &style);

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let expected = values.iter().filter(|value| **value == max).count();
        prop_assert_eq!(chart.highlighted_count(), expected);
        prop_assert_eq!(chart.row_count(), values.len());
        let expected_caption = format!("Showing {} Anime Shows: Total", values.len());
        prop_assert_eq!(&chart.caption, &expected_caption);

        let frame = chart.build_render_frame(Viewport::new(1000, 1400), &style).expect("frame");
        let mut renderer = NullRenderer::default();
        prop_assert!(renderer.render(&frame).is_ok());
    }

    #[test]
    fn scatter_build_is_deterministic_and_finite(rows in observation_rows()) {
        let table = ObservationTable::new(rows);
        let style = ChartStyle::default();

        let first = render_scatter_chart(&table, &style);
        let second = render_scatter_chart(&table, &style);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.hover_detail, table.len() < HOVER_DETAIL_ROW_LIMIT);

        let frame = first.build_render_frame(Viewport::new(700, 400), &style).expect("frame");
        prop_assert_eq!(&frame, &second.build_render_frame(Viewport::new(700, 400), &style).expect("frame"));
        prop_assert!(frame.markers.iter().all(|marker| marker.x.is_finite() && marker.y.is_finite()));
        prop_assert!(frame.validate().is_ok());
    }

    #[test]
    fn line_series_cover_every_grouped_row(rows in observation_rows()) {
        let table = ObservationTable::new(rows);
        let grouped = table.mean_polarity_by_subject_season();
        let chart = render_line_chart(&grouped, &ChartStyle::default());

        let points: usize = chart.series.iter().map(|series| series.points.len()).sum();
        prop_assert_eq!(points, grouped.len());
        prop_assert_eq!(chart.series.len(), table.subjects().len());
        for series in &chart.series {
            prop_assert!(series.points.windows(2).all(|pair| pair[0].season < pair[1].season));
            prop_assert!(series.points.iter().all(|point| point.mean_polarity.is_finite()));
        }

        let frame = chart.build_render_frame(Viewport::new(1000, 500), &ChartStyle::default()).expect("frame");
        prop_assert!(frame.validate().is_ok());
    }
}
