use std::path::Path;

use crauction_core::LotRecord;

use crate::error::PipelineError;
use crate::table::{write_table, Table};

/// Builds the full-schema lot table: one row per record, every column present.
#[must_use]
pub fn lots_table(records: &[LotRecord]) -> Table {
    let mut table = Table::new(LotRecord::headers());
    for record in records {
        table.push_row(record.to_row());
    }
    table
}

/// Persists extracted lots to `path` (normally `data_all.csv`).
///
/// # Errors
///
/// Returns [`PipelineError::Csv`] if the file cannot be written.
pub fn save_lots(path: &Path, records: &[LotRecord]) -> Result<(), PipelineError> {
    write_table(path, &lots_table(records))
        .inspect_err(|e| tracing::error!(path = %path.display(), error = %e, "error saving lots"))?;
    tracing::info!(path = %path.display(), rows = records.len(), "data saved");
    Ok(())
}
