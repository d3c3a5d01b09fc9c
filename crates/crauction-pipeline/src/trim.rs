use crauction_core::lots::{COL_DETAILS_LINK, COL_LOT_ID, COL_LOT_NO, COL_PRICE, COL_TITLE};

use crate::error::PipelineError;
use crate::table::{read_table, write_table, Table};
use crate::StagePaths;

/// Columns kept by [`trim_lots`], in output order.
pub const TRIMMED_COLUMNS: [&str; 8] = [
    COL_LOT_ID,
    COL_LOT_NO,
    COL_TITLE,
    COL_PRICE,
    "UPC",
    "Brand",
    "Model",
    COL_DETAILS_LINK,
];

/// Projects the full lot table down to [`TRIMMED_COLUMNS`].
///
/// # Errors
///
/// - [`PipelineError::FileNotFound`] if the input does not exist.
/// - [`PipelineError::MissingColumns`] if any trimmed column is absent.
/// - [`PipelineError::Csv`] on malformed input or a failed write.
pub fn trim_lots(paths: &StagePaths) -> Result<Table, PipelineError> {
    run(paths).inspect_err(|e| {
        tracing::error!(input = %paths.input.display(), error = %e, "error trimming lot table");
    })
}

fn run(paths: &StagePaths) -> Result<Table, PipelineError> {
    let table = read_table(&paths.input)?;
    let trimmed = table.project(&TRIMMED_COLUMNS)?;
    write_table(&paths.output, &trimmed)?;
    tracing::info!(
        output = %paths.output.display(),
        rows = trimmed.len(),
        "trimmed data saved"
    );
    Ok(trimmed)
}
