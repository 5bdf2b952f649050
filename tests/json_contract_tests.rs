use serde_json::Value;
use wind_dashboard::charts::{
    CHART_PAYLOAD_JSON_SCHEMA_V1, ChartPayload, ChartStyle, render_bar_chart, render_line_chart,
    render_scatter_chart,
};
use wind_dashboard::data::{
    CompletionStatus, ComparisonMetric, ComparisonRow, ComparisonTable, ObservationRow,
    ObservationTable, SeasonPolarity, SeasonPolarityTable,
};

fn sample_payloads() -> Vec<ChartPayload> {
    let style = ChartStyle::default();
    let comparison = ComparisonTable::new(vec![
        ComparisonRow::new("Gintama", CompletionStatus::Complete)
            .with_metric(ComparisonMetric::HelpfulVotesMean, 4.5),
        ComparisonRow::new("One Piece", CompletionStatus::Ongoing)
            .with_metric(ComparisonMetric::HelpfulVotesMean, 3.25),
    ]);
    let observations = ObservationTable::new(vec![
        ObservationRow::new("Gintama", 1, 0.3, 0.6, CompletionStatus::Complete).with_record_id(918),
        ObservationRow::new("Gintama", 2, -0.2, 0.4, CompletionStatus::Complete),
    ]);
    let grouped = SeasonPolarityTable::new(vec![
        SeasonPolarity::new("Gintama", 1, 0.3),
        SeasonPolarity::new("Gintama", 2, -0.2),
    ]);

    vec![
        render_bar_chart(
            &comparison,
            ComparisonMetric::HelpfulVotesMean,
            ComparisonMetric::HelpfulVotesMean.label(),
            &style,
        )
        .into(),
        render_scatter_chart(&observations, &style).into(),
        render_line_chart(&grouped, &style).into(),
    ]
}

#[test]
fn contract_v1_wraps_payload_with_schema_version() {
    for payload in sample_payloads() {
        let json = payload.to_json_contract_v1_pretty().expect("serialize");
        let value: Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["schema_version"], CHART_PAYLOAD_JSON_SCHEMA_V1);
        assert_eq!(value["chart"]["kind"], payload.kind());
        let parsed = ChartPayload::from_json_compat_str(&json).expect("parse");
        assert_eq!(parsed, payload);
    }
}

#[test]
fn bare_payload_is_accepted() {
    let payload = sample_payloads().remove(0);
    let json = payload.to_json_pretty().expect("serialize");
    assert_eq!(ChartPayload::from_json_compat_str(&json).expect("parse"), payload);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let payload = sample_payloads().remove(2);
    let json = payload.to_json_contract_v1_pretty().expect("serialize");
    let bumped = json.replacen("\"schema_version\": 1", "\"schema_version\": 2", 1);

    let err = ChartPayload::from_json_compat_str(&bumped).expect_err("v2 must be rejected");
    assert!(err.to_string().contains("unsupported chart schema version"));
}

#[test]
fn hover_detail_fields_are_omitted_when_absent() {
    let payload = sample_payloads().remove(1);
    let json = payload.to_json_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    let first = &value["points"][0]["hover"];
    assert_eq!(first["subject"], "Gintama");
    assert_eq!(first["status"], "Done");
    assert_eq!(first["record_id"], 918);
    assert!(value["points"][1]["hover"].get("record_id").is_none());
}
