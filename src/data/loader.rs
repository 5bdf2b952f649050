use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{DashboardError, DashboardResult};

/// Row type decoded from a CSV whose first column is the row key.
///
/// The key column is split off before decoding, so implementors only
/// describe the named value columns.
pub trait KeyedRecord: DeserializeOwned {
    fn assign_key(&mut self, key: String);

    /// Per-row checks run right after decoding.
    fn validate(&self) -> DashboardResult<()> {
        Ok(())
    }
}

/// Reads every row of `path`, failing on the first unreadable or invalid row.
pub fn read_keyed_csv<T: KeyedRecord>(path: &Path) -> DashboardResult<Vec<T>> {
    let file = File::open(path).map_err(|err| DashboardError::io(path, err))?;
    let rows = read_keyed_records(file, path)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded keyed csv");
    Ok(rows)
}

/// Same as [`read_keyed_csv`] over any reader; `source` only labels errors.
pub fn read_keyed_records<T: KeyedRecord, R: Read>(
    reader: R,
    source: &Path,
) -> DashboardResult<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| DashboardError::csv(source, err))?
        .clone();
    if headers.is_empty() {
        return Err(DashboardError::InvalidData(format!(
            "`{}` has no header row",
            source.display()
        )));
    }
    let value_headers: StringRecord = headers.iter().skip(1).collect();
    trace!(columns = ?value_headers, "csv value columns");

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|err| DashboardError::csv(source, err))?;
        // Header is line 1.
        let line = record.position().map_or(0, |position| position.line());
        let key = record.get(0).unwrap_or_default().to_owned();
        let values: StringRecord = record.iter().skip(1).collect();

        let mut row: T = values.deserialize(Some(&value_headers)).map_err(|err| {
            DashboardError::InvalidData(format!(
                "`{}` line {line} (key `{key}`): {err}",
                source.display()
            ))
        })?;
        row.validate().map_err(|err| {
            DashboardError::InvalidData(format!(
                "`{}` line {line} (key `{key}`): {err}",
                source.display()
            ))
        })?;
        row.assign_key(key);
        rows.push(row);
    }

    Ok(rows)
}
