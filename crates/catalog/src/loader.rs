//! CSV loading for user-supplied shower lists.

use std::path::Path;

use tracing::debug;

use crate::error::CatalogError;
use crate::record::ShowerRecord;

/// Reads shower records from a CSV file with a header row.
///
/// Field order must match the [`ShowerRecord`] column layout; whitespace
/// around fields is trimmed. Any unreadable or undecodable row aborts the
/// load.
pub(crate) fn read_csv(path: &Path) -> Result<Vec<ShowerRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            let reason = e.to_string();
            match e.into_kind() {
                csv::ErrorKind::Io(source) => CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                _ => CatalogError::Parse {
                    path: path.to_path_buf(),
                    reason,
                },
            }
        })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<ShowerRecord>() {
        let record = row.map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(code = record.code(), "parsed shower row");
        records.push(record);
    }
    Ok(records)
}
