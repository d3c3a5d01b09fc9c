//! Plain-text rendering of analysis results for the terminal.

use crauction_core::AnalysisRecord;

use crate::format_number;

const EMPTY_CELL: &str = "-";

/// Renders `records` as a left-aligned table, one line per lot.
///
/// Missing values are shown as `-`. An empty slice renders only the header.
#[must_use]
pub fn render_analysis(records: &[AnalysisRecord]) -> String {
    let cells: Vec<[String; 6]> = records.iter().map(row_cells).collect();

    let mut widths = AnalysisRecord::COLUMNS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &AnalysisRecord::COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row_cells(record: &AnalysisRecord) -> [String; 6] {
    let num = |v: Option<f64>| v.map_or_else(|| EMPTY_CELL.to_owned(), format_number);
    [
        record.lot_no.clone(),
        num(record.price),
        num(record.sqft),
        record
            .cases
            .map_or_else(|| EMPTY_CELL.to_owned(), |c| c.to_string()),
        num(record.price_per_sqft),
        num(record.price_per_case),
    ]
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell.as_ref()));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
