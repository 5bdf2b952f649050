use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Two-valued production status carried by both tables.
///
/// Parsed from `Done` / `Not Done` or boolean spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CompletionStatus {
    Complete,
    Ongoing,
}

impl CompletionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "Done",
            Self::Ongoing => "Not Done",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionStatus {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "done" | "finished" | "complete" | "true" | "1" => Ok(Self::Complete),
            "not done" | "ongoing" | "false" | "0" => Ok(Self::Ongoing),
            other => Err(DashboardError::InvalidData(format!(
                "unknown completion status `{other}`"
            ))),
        }
    }
}

impl TryFrom<String> for CompletionStatus {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompletionStatus> for String {
    fn from(value: CompletionStatus) -> Self {
        value.as_str().to_owned()
    }
}

/// Sign classification of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentClass {
    #[serde(alias = "positive")]
    Positive,
    #[serde(alias = "neutral")]
    Neutral,
    #[serde(alias = "negative")]
    Negative,
}

impl SentimentClass {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status selector used to narrow the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    Any,
    Ongoing,
    Finished,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::Any, Self::Ongoing, Self::Finished];

    #[must_use]
    pub fn matches(self, status: CompletionStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Ongoing => status == CompletionStatus::Ongoing,
            Self::Finished => status == CompletionStatus::Complete,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Ongoing => "Ongoing",
            Self::Finished => "Finished",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| {
                DashboardError::InvalidData(format!(
                    "unknown status filter `{input}` (expected Any, Ongoing or Finished)"
                ))
            })
    }
}
