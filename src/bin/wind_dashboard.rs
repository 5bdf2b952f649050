use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use wind_dashboard::charts::ChartPayload;
use wind_dashboard::data::{ComparisonMetric, StatusFilter};
use wind_dashboard::{Dashboard, DashboardConfig, telemetry};

const USAGE: &str = "usage: wind_dashboard page <selection> [--config <path>] [--output <path>]\n       wind_dashboard chart <bar|scatter|line> [--metric <label>] [--status <Any|Ongoing|Finished>] [--subject <name>]... [--format json|svg|png] [--config <path>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bar,
    Scatter,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Svg,
    Png,
}

#[derive(Debug)]
enum CommandKind {
    Page {
        selection: String,
    },
    Chart {
        kind: ChartKind,
        metric: ComparisonMetric,
        status: StatusFilter,
        subjects: Vec<String>,
        format: OutputFormat,
    },
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => DashboardConfig::from_json_file(path).map_err(|err| err.to_string())?,
        None => DashboardConfig::default(),
    };
    let dashboard = Dashboard::load(config).map_err(|err| err.to_string())?;

    match args.command {
        CommandKind::Page { selection } => {
            let html = dashboard
                .render_page_html(&selection)
                .map_err(|err| err.to_string())?;
            write_output(args.output.as_deref(), html.as_bytes())
        }
        CommandKind::Chart {
            kind,
            metric,
            status,
            subjects,
            format,
        } => {
            let chart: ChartPayload = match kind {
                ChartKind::Bar => dashboard.bar_chart(metric, status).into(),
                ChartKind::Scatter => dashboard
                    .scatter_chart(subjects.first().map(String::as_str))
                    .into(),
                ChartKind::Line => dashboard.season_line_chart(subjects.as_slice()).into(),
            };
            match format {
                OutputFormat::Json => {
                    let json = chart
                        .to_json_contract_v1_pretty()
                        .map_err(|err| err.to_string())?;
                    write_output(args.output.as_deref(), json.as_bytes())
                }
                OutputFormat::Svg => {
                    let svg = dashboard.chart_svg(&chart).map_err(|err| err.to_string())?;
                    write_output(args.output.as_deref(), svg.as_bytes())
                }
                OutputFormat::Png => {
                    let output = args
                        .output
                        .as_deref()
                        .ok_or_else(|| "--format png requires --output".to_owned())?;
                    write_png(&dashboard, &chart, output)
                }
            }
        }
    }
}

#[cfg(feature = "cairo-backend")]
fn write_png(dashboard: &Dashboard, chart: &ChartPayload, path: &Path) -> Result<(), String> {
    dashboard
        .write_chart_png(chart, path)
        .map_err(|err| err.to_string())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_dashboard: &Dashboard, _chart: &ChartPayload, _path: &Path) -> Result<(), String> {
    Err("png output requires the `cairo-backend` feature".to_owned())
}

fn write_output(path: Option<&Path>, payload: &[u8]) -> Result<(), String> {
    match path {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => io::stdout()
            .write_all(payload)
            .map_err(|err| format!("failed to write stdout: {err}")),
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut args = args.into_iter();
    let command = args.next();
    let target = args.next();

    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut metric = ComparisonMetric::TotalReviews;
    let mut status = StatusFilter::Any;
    let mut subjects = Vec::new();
    let mut format = OutputFormat::Svg;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--metric" => {
                metric = value("--metric")?
                    .parse()
                    .map_err(|err: wind_dashboard::DashboardError| err.to_string())?;
            }
            "--status" => {
                status = value("--status")?
                    .parse()
                    .map_err(|err: wind_dashboard::DashboardError| err.to_string())?;
            }
            "--subject" => subjects.push(value("--subject")?),
            "--format" => {
                format = match value("--format")?.as_str() {
                    "json" => OutputFormat::Json,
                    "svg" => OutputFormat::Svg,
                    "png" => OutputFormat::Png,
                    other => return Err(format!("unsupported format `{other}`")),
                };
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let command = match (command.as_deref(), target) {
        (Some("page"), Some(selection)) => CommandKind::Page { selection },
        (Some("chart"), Some(kind)) => {
            let kind = match kind.as_str() {
                "bar" => ChartKind::Bar,
                "scatter" => ChartKind::Scatter,
                "line" => ChartKind::Line,
                other => return Err(format!("unsupported chart `{other}`\n{USAGE}")),
            };
            if kind == ChartKind::Scatter && subjects.len() > 1 {
                return Err(format!(
                    "scatter accepts at most one --subject, got {}",
                    subjects.len()
                ));
            }
            CommandKind::Chart {
                kind,
                metric,
                status,
                subjects,
                format,
            }
        }
        _ => return Err(USAGE.to_owned()),
    };

    Ok(CliArgs {
        command,
        config,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn scatter_rejects_more_than_one_subject() {
        let err = parse_args(args(&[
            "chart",
            "scatter",
            "--subject",
            "Gintama",
            "--subject",
            "One Piece",
        ]))
        .expect_err("two subjects must fail");
        assert!(err.contains("at most one --subject"));
    }

    #[test]
    fn scatter_keeps_single_subject() {
        let parsed = parse_args(args(&["chart", "scatter", "--subject", "Gintama", "--format", "json"]))
            .expect("parse");
        match parsed.command {
            CommandKind::Chart {
                kind,
                subjects,
                format,
                ..
            } => {
                assert_eq!(kind, ChartKind::Scatter);
                assert_eq!(subjects, vec!["Gintama".to_owned()]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn line_accepts_several_subjects() {
        let parsed = parse_args(args(&[
            "chart",
            "line",
            "--subject",
            "Gintama",
            "--subject",
            "One Piece",
        ]))
        .expect("parse");
        assert!(matches!(
            parsed.command,
            CommandKind::Chart { kind: ChartKind::Line, ref subjects, .. } if subjects.len() == 2
        ));
    }
}
