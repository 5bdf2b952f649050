use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::loader::{KeyedRecord, read_keyed_csv};
use crate::data::{CompletionStatus, StatusFilter};
use crate::error::{DashboardError, DashboardResult};

/// One subject's aggregate review descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(skip)]
    pub key: String,
    #[serde(rename = "Anime")]
    pub subject: String,
    #[serde(rename = "review")]
    pub total_reviews: f64,
    #[serde(rename = "season")]
    pub seasons: f64,
    #[serde(rename = "sum_helpful")]
    pub helpful_votes_total: f64,
    #[serde(rename = "helpful_avg")]
    pub helpful_votes_mean: f64,
    #[serde(rename = "helpful_median")]
    pub helpful_votes_median: f64,
    #[serde(rename = "done")]
    pub status: CompletionStatus,
}

impl ComparisonRow {
    #[must_use]
    pub fn new(subject: impl Into<String>, status: CompletionStatus) -> Self {
        let subject = subject.into();
        Self {
            key: subject.clone(),
            subject,
            total_reviews: 0.0,
            seasons: 0.0,
            helpful_votes_total: 0.0,
            helpful_votes_mean: 0.0,
            helpful_votes_median: 0.0,
            status,
        }
    }

    #[must_use]
    pub fn with_metric(mut self, metric: ComparisonMetric, value: f64) -> Self {
        *metric.value_mut(&mut self) = value;
        self
    }
}

impl KeyedRecord for ComparisonRow {
    fn assign_key(&mut self, key: String) {
        self.key = key;
    }

    fn validate(&self) -> DashboardResult<()> {
        for metric in ComparisonMetric::ALL {
            let value = metric.value(self);
            if !value.is_finite() {
                return Err(DashboardError::InvalidData(format!(
                    "column `{}` must be a finite number, got {value}",
                    metric.column()
                )));
            }
        }
        Ok(())
    }
}

/// Numeric columns of the comparison table that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonMetric {
    TotalReviews,
    Seasons,
    HelpfulVotesTotal,
    HelpfulVotesMean,
    HelpfulVotesMedian,
}

impl ComparisonMetric {
    pub const ALL: [Self; 5] = [
        Self::TotalReviews,
        Self::Seasons,
        Self::HelpfulVotesTotal,
        Self::HelpfulVotesMean,
        Self::HelpfulVotesMedian,
    ];

    /// Human-readable label shown in selectors and captions.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalReviews => "Total Number of Reviews",
            Self::Seasons => "Number of Seasons",
            Self::HelpfulVotesTotal => "Total Vote Count of Helpful Reviews",
            Self::HelpfulVotesMean => "Mean Vote Count of Helpful Reviews",
            Self::HelpfulVotesMedian => "Median Vote Count of Helpful Reviews",
        }
    }

    /// CSV header of the backing column.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::TotalReviews => "review",
            Self::Seasons => "season",
            Self::HelpfulVotesTotal => "sum_helpful",
            Self::HelpfulVotesMean => "helpful_avg",
            Self::HelpfulVotesMedian => "helpful_median",
        }
    }

    #[must_use]
    pub fn value(self, row: &ComparisonRow) -> f64 {
        match self {
            Self::TotalReviews => row.total_reviews,
            Self::Seasons => row.seasons,
            Self::HelpfulVotesTotal => row.helpful_votes_total,
            Self::HelpfulVotesMean => row.helpful_votes_mean,
            Self::HelpfulVotesMedian => row.helpful_votes_median,
        }
    }

    fn value_mut(self, row: &mut ComparisonRow) -> &mut f64 {
        match self {
            Self::TotalReviews => &mut row.total_reviews,
            Self::Seasons => &mut row.seasons,
            Self::HelpfulVotesTotal => &mut row.helpful_votes_total,
            Self::HelpfulVotesMean => &mut row.helpful_votes_mean,
            Self::HelpfulVotesMedian => &mut row.helpful_votes_median,
        }
    }
}

impl fmt::Display for ComparisonMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComparisonMetric {
    type Err = DashboardError;

    /// Accepts either the label or the column name, case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|metric| {
                metric.label().eq_ignore_ascii_case(needle)
                    || metric.column().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DashboardError::InvalidData(format!("unknown metric `{input}`")))
    }
}

/// Per-subject aggregate table, read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    #[must_use]
    pub fn new(rows: Vec<ComparisonRow>) -> Self {
        Self { rows }
    }

    pub fn load(path: &Path) -> DashboardResult<Self> {
        read_keyed_csv(path).map(Self::new)
    }

    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose status passes `filter`, in table order.
    #[must_use]
    pub fn filter_by_status(&self, filter: StatusFilter) -> Self {
        let rows: Vec<ComparisonRow> = self
            .rows
            .iter()
            .filter(|row| filter.matches(row.status))
            .cloned()
            .collect();
        debug!(
            filter = filter.label(),
            before = self.rows.len(),
            after = rows.len(),
            "filter comparison table by status"
        );
        Self { rows }
    }

    /// Largest finite value of `metric`, if any row has one.
    #[must_use]
    pub fn max_of(&self, metric: ComparisonMetric) -> Option<f64> {
        self.rows
            .iter()
            .map(|row| metric.value(row))
            .filter(|value| value.is_finite())
            .max_by_key(|value| OrderedFloat(*value))
    }
}
