use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV file is missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// `row` is the 1-based data row, not counting the header.
    #[error("invalid numeric value {value:?} in column \"{column}\" at row {row}")]
    Format {
        column: String,
        row: usize,
        value: String,
    },
}
