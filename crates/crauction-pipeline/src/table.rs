//! In-memory CSV table with named columns.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::PipelineError;

/// Header row plus string cells. Every row is as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
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

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of column `name`, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Names from `required` that this table lacks, in `required` order.
    #[must_use]
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| (*name).to_owned())
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`PipelineError::MissingColumns`] listing every absent column.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), PipelineError> {
        let columns = self.missing_columns(required);
        if columns.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::MissingColumns { columns })
        }
    }

    /// Adds column `name` filled with `fill`. Returns `false` (and changes
    /// nothing) if the column already exists.
    pub fn add_column(&mut self, name: &str, fill: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.headers.push(name.to_owned());
        for row in &mut self.rows {
            row.push(fill.to_owned());
        }
        true
    }

    /// Replaces the cells of column `name`, adding the column if absent.
    ///
    /// Missing trailing values become empty cells.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        let idx = if let Some(idx) = self.column_index(name) {
            idx
        } else {
            self.add_column(name, "");
            self.headers.len() - 1
        };
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row[idx] = values.next().unwrap_or_default();
        }
    }

    /// New table holding exactly `columns`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingColumns`] if any column is absent.
    pub fn project(&self, columns: &[&str]) -> Result<Table, PipelineError> {
        self.require_columns(columns)?;
        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        let mut projected = Table::new(columns.iter().copied());
        for row in &self.rows {
            projected.push_row(indices.iter().map(|&i| row[i].clone()).collect());
        }
        Ok(projected)
    }
}

/// Reads a headed CSV file into a [`Table`].
///
/// # Errors
///
/// - [`PipelineError::FileNotFound`] if `path` does not exist.
/// - [`PipelineError::Io`] for other open failures.
/// - [`PipelineError::Csv`] if the file is not well-formed CSV.
pub fn read_table(path: &Path) -> Result<Table, PipelineError> {
    tracing::info!(path = %path.display(), "reading input file");
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PipelineError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PipelineError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let csv_err = |source: csv::Error| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut table = Table::new(reader.headers().map_err(csv_err)?.iter());
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        table.push_row(record.iter().map(str::to_owned).collect());
    }
    tracing::debug!(path = %path.display(), rows = table.len(), "read table");
    Ok(table)
}

/// Writes `table` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`PipelineError::Csv`] if the file cannot be created or written.
pub fn write_table(path: &Path, table: &Table) -> Result<(), PipelineError> {
    let csv_err = |source: csv::Error| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(table.headers()).map_err(csv_err)?;
    for row in table.rows() {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
