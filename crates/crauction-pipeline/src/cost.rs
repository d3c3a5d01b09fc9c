//! Per-unit price ratios.

use std::path::Path;

use crauction_core::analysis::{COL_CASES, COL_SQFT};
use crauction_core::lots::{COL_LOT_NO, COL_PRICE};
use crauction_core::AnalysisRecord;

use crate::error::PipelineError;
use crate::sqft::CLEAN_COLUMNS;
use crate::table::{read_table, Table};
use crate::StagePaths;

/// Parses a price cell, ignoring `$` and thousands separators.
///
/// Empty cells are `Ok(None)`. `row` is only used for error context.
///
/// # Errors
///
/// Returns [`PipelineError::Format`] if what remains is not a finite number.
pub fn clean_price(raw: &str, row: usize) -> Result<Option<f64>, PipelineError> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    parse_number(&cleaned, COL_PRICE, row).map_err(|_| PipelineError::Format {
        column: COL_PRICE.to_owned(),
        row,
        value: raw.to_owned(),
    })
}

/// Parses a numeric cell. Empty cells are `Ok(None)`.
fn parse_number(raw: &str, column: &str, row: usize) -> Result<Option<f64>, PipelineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(PipelineError::Format {
            column: column.to_owned(),
            row,
            value: raw.to_owned(),
        }),
    }
}

/// Parses a case count. Empty cells are `Ok(None)`; anything but a
/// non-negative whole number is a [`PipelineError::Format`].
fn parse_cases(raw: &str, row: usize) -> Result<Option<u32>, PipelineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| PipelineError::Format {
            column: COL_CASES.to_owned(),
            row,
            value: raw.to_owned(),
        })
}

/// Computes `Price/sqft` and `Price/case` for every row and writes the
/// analysis file.
///
/// A missing `sqft` column is treated as all-empty; a missing `cases`
/// column is filled with `default_cases`. Existing cells pass through.
///
/// # Errors
///
/// - [`PipelineError::FileNotFound`] if the input does not exist.
/// - [`PipelineError::MissingColumns`] if `Lot No` or `Price` is absent.
/// - [`PipelineError::Format`] if a price or sqft cell is not numeric, or a
///   cases cell is not a whole number.
/// - [`PipelineError::Csv`] on malformed input or a failed write.
pub fn analyze_costs(
    paths: &StagePaths,
    default_cases: u32,
) -> Result<Vec<AnalysisRecord>, PipelineError> {
    run(paths, default_cases).inspect_err(|e| {
        tracing::error!(input = %paths.input.display(), error = %e, "error processing CSV");
    })
}

fn run(paths: &StagePaths, default_cases: u32) -> Result<Vec<AnalysisRecord>, PipelineError> {
    let mut table = read_table(&paths.input)?;

    if table.add_column(COL_SQFT, "") {
        tracing::info!("added missing sqft column with empty values");
    }
    if table.add_column(COL_CASES, &default_cases.to_string()) {
        tracing::info!(default_cases, "added missing cases column with default value");
    }
    table.require_columns(&CLEAN_COLUMNS)?;

    tracing::info!("cleaning Price column");
    let records = build_records(&table)?;

    tracing::info!(output = %paths.output.display(), "saving results");
    write_records(&paths.output, &records)?;
    tracing::info!(rows = records.len(), "analysis completed successfully");
    Ok(records)
}

fn build_records(table: &Table) -> Result<Vec<AnalysisRecord>, PipelineError> {
    let index = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| PipelineError::MissingColumns {
                columns: vec![name.to_owned()],
            })
    };
    let (lot_no, price, sqft, cases) = (
        index(COL_LOT_NO)?,
        index(COL_PRICE)?,
        index(COL_SQFT)?,
        index(COL_CASES)?,
    );

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let row_no = i + 1;
            Ok(AnalysisRecord::new(
                row[lot_no].clone(),
                clean_price(&row[price], row_no)?,
                parse_number(&row[sqft], COL_SQFT, row_no)?,
                parse_cases(&row[cases], row_no)?,
            ))
        })
        .collect()
}

fn write_records(path: &Path, records: &[AnalysisRecord]) -> Result<(), PipelineError> {
    let csv_err = |source: csv::Error| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    if records.is_empty() {
        writer
            .write_record(AnalysisRecord::COLUMNS)
            .map_err(csv_err)?;
    }
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "cost_test.rs"]
mod tests;
