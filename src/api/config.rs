use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::charts::{ChartStyle, ChartViewports};
use crate::error::{DashboardError, DashboardResult};

/// Dashboard bootstrap configuration.
///
/// Serializable so deployments can keep data locations and presentation
/// settings in a JSON file next to the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_comparison_path")]
    pub comparison_path: PathBuf,
    #[serde(default = "default_observation_path")]
    pub observation_path: PathBuf,
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default)]
    pub chart_style: ChartStyle,
    #[serde(default)]
    pub viewports: ChartViewports,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            comparison_path: default_comparison_path(),
            observation_path: default_observation_path(),
            asset_dir: default_asset_dir(),
            page_title: default_page_title(),
            chart_style: ChartStyle::default(),
            viewports: ChartViewports::default(),
        }
    }
}

impl DashboardConfig {
    /// Config reading both tables from `data_dir` with the default file names.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        self.comparison_path = data_dir.join(COMPARISON_FILE);
        self.observation_path = data_dir.join(OBSERVATION_FILE);
        self
    }

    #[must_use]
    pub fn with_comparison_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.comparison_path = path.into();
        self
    }

    #[must_use]
    pub fn with_observation_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.observation_path = path.into();
        self
    }

    #[must_use]
    pub fn with_asset_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.asset_dir = path.into();
        self
    }

    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, style: ChartStyle) -> Self {
        self.chart_style = style;
        self
    }

    #[must_use]
    pub fn with_viewports(mut self, viewports: ChartViewports) -> Self {
        self.viewports = viewports;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.page_title.trim().is_empty() {
            return Err(DashboardError::Config("page title must not be empty".to_owned()));
        }
        self.chart_style.validate()?;
        self.viewports.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; absent fields take their defaults.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DashboardError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> DashboardResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| DashboardError::io(path, err))?;
        Self::from_json_str(&raw)
    }
}

const COMPARISON_FILE: &str = "for_data.csv";
const OBSERVATION_FILE: &str = "for_model.csv";

fn default_comparison_path() -> PathBuf {
    Path::new("data").join(COMPARISON_FILE)
}

fn default_observation_path() -> PathBuf {
    Path::new("data").join(OBSERVATION_FILE)
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_page_title() -> String {
    "Predicting Candidate Wind Farm Locations in the Philippines".to_owned()
}
