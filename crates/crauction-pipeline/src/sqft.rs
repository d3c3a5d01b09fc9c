//! Square-footage derivation from lot titles.

use std::sync::LazyLock;

use crauction_core::analysis::{COL_CASES, COL_SQFT};
use crauction_core::lots::{COL_LOT_NO, COL_PRICE, COL_TITLE};
use regex::Regex;

use crate::error::PipelineError;
use crate::table::{read_table, write_table, Table};
use crate::{format_number, StagePaths};

static SQFT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Approx\s*([0-9]+\.?[0-9]*)\s*SQ\s*FT").expect("valid sqft regex")
});

/// Columns kept by [`derive_sqft`], in output order.
pub const CLEAN_COLUMNS: [&str; 4] = [COL_LOT_NO, COL_PRICE, COL_SQFT, COL_CASES];

/// Parses the area out of a title such as `"Approx 1250.5 SQ FT Flooring"`.
///
/// Returns `None` for blank titles and titles without the pattern.
#[must_use]
pub fn parse_sqft(title: &str) -> Option<f64> {
    if title.trim().is_empty() {
        return None;
    }

    let Some(caps) = SQFT_RE.captures(title) else {
        tracing::debug!(title = %preview(title), "no sqft pattern found in title");
        return None;
    };

    match caps[1].parse::<f64>() {
        Ok(sqft) => {
            tracing::debug!(sqft, title = %preview(title), "extracted sqft");
            Some(sqft)
        }
        Err(e) => {
            tracing::warn!(title = %preview(title), error = %e, "could not convert sqft to a number");
            None
        }
    }
}

/// Derives `sqft` from `Title`, ensures a `cases` column, and projects to
/// [`CLEAN_COLUMNS`].
///
/// An existing `sqft` column is overwritten. A missing `cases` column is
/// added and filled with `default_cases`; existing `cases` cells are kept.
/// A missing `Title` column leaves every `sqft` empty.
///
/// # Errors
///
/// - [`PipelineError::FileNotFound`] if the input does not exist.
/// - [`PipelineError::MissingColumns`] if `Lot No` or `Price` is absent.
/// - [`PipelineError::Csv`] on malformed input or a failed write.
pub fn derive_sqft(paths: &StagePaths, default_cases: u32) -> Result<Table, PipelineError> {
    run(paths, default_cases).inspect_err(|e| {
        tracing::error!(input = %paths.input.display(), error = %e, "error deriving sqft");
    })
}

fn run(paths: &StagePaths, default_cases: u32) -> Result<Table, PipelineError> {
    let mut table = read_table(&paths.input)?;

    let sqft: Vec<Option<f64>> = if let Some(titles) = table.column(COL_TITLE) {
        titles.map(parse_sqft).collect()
    } else {
        tracing::warn!(input = %paths.input.display(), "input has no Title column; sqft left empty");
        vec![None; table.len()]
    };

    let extracted = sqft.iter().filter(|v| v.is_some()).count();
    tracing::info!(extracted, rows = table.len(), "extracted sqft");

    if !table.has_column(COL_SQFT) {
        tracing::info!("added missing sqft column");
    }
    table.set_column(
        COL_SQFT,
        sqft.into_iter()
            .map(|v| v.map(format_number).unwrap_or_default())
            .collect(),
    );

    if table.add_column(COL_CASES, &default_cases.to_string()) {
        tracing::info!(default_cases, "added missing cases column");
    }

    let clean = table.project(&CLEAN_COLUMNS)?;
    write_table(&paths.output, &clean)?;
    tracing::info!(
        output = %paths.output.display(),
        rows = clean.len(),
        "trimmed data with sqft saved"
    );
    Ok(clean)
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
