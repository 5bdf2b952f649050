//! Tabular inputs of the dashboard.
//!
//! Both tables are read once at startup and never mutated; they are shared by
//! reference with every chart and page entry point.

mod comparison;
mod loader;
mod observation;
mod status;

pub use comparison::{ComparisonMetric, ComparisonRow, ComparisonTable};
pub use loader::{KeyedRecord, read_keyed_csv, read_keyed_records};
pub use observation::{ObservationRow, ObservationTable, SeasonPolarity, SeasonPolarityTable};
pub use status::{CompletionStatus, SentimentClass, StatusFilter};

use std::path::Path;

use tracing::info;

use crate::error::DashboardResult;

/// Both input tables, loaded once and injected into every entry point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub comparison: ComparisonTable,
    pub observations: ObservationTable,
}

impl DashboardData {
    #[must_use]
    pub fn new(comparison: ComparisonTable, observations: ObservationTable) -> Self {
        Self {
            comparison,
            observations,
        }
    }

    /// Loads both tables; any unreadable or malformed file is fatal.
    pub fn load(comparison_path: &Path, observation_path: &Path) -> DashboardResult<Self> {
        let comparison = ComparisonTable::load(comparison_path)?;
        let observations = ObservationTable::load(observation_path)?;
        info!(
            comparison_rows = comparison.len(),
            observation_rows = observations.len(),
            "dashboard data loaded"
        );
        Ok(Self::new(comparison, observations))
    }
}
