use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::loader::{KeyedRecord, read_keyed_csv};
use crate::data::{CompletionStatus, SentimentClass};
use crate::error::{DashboardError, DashboardResult};

/// One scored review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    #[serde(skip)]
    pub key: String,
    #[serde(rename = "Anime")]
    pub subject: String,
    #[serde(rename = "Season")]
    pub season: u32,
    #[serde(rename = "Polarity")]
    pub polarity: f64,
    #[serde(rename = "Subjectivity")]
    pub subjectivity: f64,
    #[serde(rename = "Analysis")]
    pub classification: SentimentClass,
    #[serde(rename = "Done")]
    pub status: CompletionStatus,
    #[serde(rename = "mal_id", default)]
    pub record_id: Option<u64>,
}

impl ObservationRow {
    /// Builds a row whose classification is derived from `polarity`.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        season: u32,
        polarity: f64,
        subjectivity: f64,
        status: CompletionStatus,
    ) -> Self {
        let subject = subject.into();
        Self {
            key: format!("{subject}/{season}"),
            subject,
            season,
            polarity,
            subjectivity,
            classification: SentimentClass::from_polarity(polarity),
            status,
            record_id: None,
        }
    }

    #[must_use]
    pub fn with_record_id(mut self, record_id: u64) -> Self {
        self.record_id = Some(record_id);
        self
    }
}

impl KeyedRecord for ObservationRow {
    fn assign_key(&mut self, key: String) {
        self.key = key;
    }

    fn validate(&self) -> DashboardResult<()> {
        if !self.polarity.is_finite() {
            return Err(DashboardError::InvalidData(
                "polarity must be a finite number".to_owned(),
            ));
        }
        if !self.subjectivity.is_finite() || self.subjectivity < 0.0 {
            return Err(DashboardError::InvalidData(
                "subjectivity must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Per-review sentiment table, read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    rows: Vec<ObservationRow>,
}

impl ObservationTable {
    #[must_use]
    pub fn new(rows: Vec<ObservationRow>) -> Self {
        Self { rows }
    }

    pub fn load(path: &Path) -> DashboardResult<Self> {
        read_keyed_csv(path).map(Self::new)
    }

    #[must_use]
    pub fn rows(&self) -> &[ObservationRow] {
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

    /// Distinct subject names, sorted.
    #[must_use]
    pub fn subjects(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.subject.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn filter_subject(&self, subject: &str) -> Self {
        self.filter_subjects(&[subject])
    }

    /// Rows belonging to any of `subjects`, in table order.
    #[must_use]
    pub fn filter_subjects<S: AsRef<str>>(&self, subjects: &[S]) -> Self {
        let rows: Vec<ObservationRow> = self
            .rows
            .iter()
            .filter(|row| subjects.iter().any(|subject| subject.as_ref() == row.subject))
            .cloned()
            .collect();
        debug!(
            subjects = subjects.len(),
            before = self.rows.len(),
            after = rows.len(),
            "filter observation table by subject"
        );
        Self { rows }
    }

    /// Mean polarity per (subject, season), ordered by subject then season.
    #[must_use]
    pub fn mean_polarity_by_subject_season(&self) -> SeasonPolarityTable {
        let mut groups: BTreeMap<(&str, u32), (f64, usize)> = BTreeMap::new();
        for row in &self.rows {
            let entry = groups
                .entry((row.subject.as_str(), row.season))
                .or_insert((0.0, 0));
            entry.0 += row.polarity;
            entry.1 += 1;
        }

        let rows = groups
            .into_iter()
            .map(|((subject, season), (sum, count))| SeasonPolarity {
                subject: subject.to_owned(),
                season,
                mean_polarity: sum / count as f64,
            })
            .collect::<Vec<_>>();
        debug!(groups = rows.len(), "grouped mean polarity by subject and season");
        SeasonPolarityTable { rows }
    }
}

/// Mean polarity of one subject in one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPolarity {
    pub subject: String,
    pub season: u32,
    pub mean_polarity: f64,
}

impl SeasonPolarity {
    #[must_use]
    pub fn new(subject: impl Into<String>, season: u32, mean_polarity: f64) -> Self {
        Self {
            subject: subject.into(),
            season,
            mean_polarity,
        }
    }
}

/// Table pre-grouped by (subject, season); input of the line renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonPolarityTable {
    rows: Vec<SeasonPolarity>,
}

impl SeasonPolarityTable {
    #[must_use]
    pub fn new(rows: Vec<SeasonPolarity>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[SeasonPolarity] {
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
}

impl FromIterator<SeasonPolarity> for SeasonPolarityTable {
    fn from_iter<I: IntoIterator<Item = SeasonPolarity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
