use super::*;
use crate::table::write_table;

fn paths(dir: &tempfile::TempDir) -> StagePaths {
    StagePaths::new(dir.path().join("clean.csv"), dir.path().join("analysis.csv"))
}

fn write_input(paths: &StagePaths, headers: &[&str], rows: &[&[&str]]) {
    let mut table = Table::new(headers.iter().copied());
    for row in rows {
        table.push_row(row.iter().map(|c| (*c).to_owned()).collect());
    }
    write_table(&paths.input, &table).unwrap();
}

fn read_output(paths: &StagePaths) -> Table {
    read_table(&paths.output).unwrap()
}

#[test]
fn clean_price_strips_currency_and_separators() {
    assert_eq!(clean_price("$1,234.50", 1).unwrap(), Some(1234.5));
    assert_eq!(clean_price("75", 1).unwrap(), Some(75.0));
}

#[test]
fn clean_price_empty_is_none() {
    assert_eq!(clean_price("", 1).unwrap(), None);
    assert_eq!(clean_price("$", 1).unwrap(), None);
}

#[test]
fn clean_price_rejects_text() {
    let err = clean_price("$N/A", 3).unwrap_err();
    assert!(
        matches!(err, PipelineError::Format { ref column, row: 3, ref value } if column == "Price" && value == "$N/A"),
        "expected Format, got: {err:?}"
    );
}

#[test]
fn clean_price_rejects_infinity() {
    assert!(clean_price("inf", 1).is_err());
}

#[test]
fn analyze_computes_ratios() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft", "cases"],
        &[&["12", "$1,000.00", "1250", "40"]],
    );

    let records = analyze_costs(&paths, 40).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.lot_no, "12");
    assert_eq!(record.price, Some(1000.0));
    assert_eq!(record.price_per_sqft, Some(0.8));
    assert_eq!(record.price_per_case, Some(25.0));

    let output = read_output(&paths);
    assert_eq!(output.headers(), AnalysisRecord::COLUMNS);
    assert_eq!(output.rows()[0], ["12", "1000.0", "1250.0", "40", "0.8", "25.0"]);
}

#[test]
fn analyze_leaves_ratio_empty_for_missing_or_zero_divisor() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft", "cases"],
        &[&["1", "$500", "", "0"], &["2", "", "100", "10"]],
    );

    let records = analyze_costs(&paths, 40).unwrap();
    assert_eq!(records[0].price_per_sqft, None);
    assert_eq!(records[0].price_per_case, None);
    assert_eq!(records[1].price, None);
    assert_eq!(records[1].price_per_sqft, None);
    assert_eq!(records[1].price_per_case, None);

    let raw = std::fs::read_to_string(&paths.output).unwrap();
    assert!(raw.contains("1,500.0,,0,,\n"), "unexpected output: {raw}");
}

#[test]
fn analyze_fills_missing_columns() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(&paths, &["Lot No", "Price"], &[&["7", "$80"]]);

    let records = analyze_costs(&paths, 40).unwrap();
    assert_eq!(records[0].sqft, None);
    assert_eq!(records[0].cases, Some(40));
    assert_eq!(records[0].price_per_case, Some(2.0));
}

#[test]
fn analyze_fills_cases_and_passes_mixed_sqft_through() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft"],
        &[&["1", "$100", "100"], &["2", "$50", ""], &["3", "$75", "0"]],
    );

    let records = analyze_costs(&paths, 40).unwrap();
    let sqft: Vec<Option<f64>> = records.iter().map(|r| r.sqft).collect();
    assert_eq!(sqft, [Some(100.0), None, Some(0.0)]);
    assert!(records.iter().all(|r| r.cases == Some(40)));
    let per_sqft: Vec<Option<f64>> = records.iter().map(|r| r.price_per_sqft).collect();
    assert_eq!(per_sqft, [Some(1.0), None, None]);

    let output = read_output(&paths);
    let cases: Vec<&str> = output.column("cases").unwrap().collect();
    assert_eq!(cases, ["40", "40", "40"]);
    let sqft_cells: Vec<&str> = output.column("sqft").unwrap().collect();
    assert_eq!(sqft_cells, ["100.0", "", "0.0"]);
}

#[test]
fn analyze_writes_cases_as_whole_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft", "cases"],
        &[&["1", "$100", "", "40"]],
    );

    analyze_costs(&paths, 40).unwrap();
    let raw = std::fs::read_to_string(&paths.output).unwrap();
    assert!(raw.contains("1,100.0,,40,,2.5\n"), "unexpected output: {raw}");
}

#[test]
fn analyze_rejects_fractional_cases() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft", "cases"],
        &[&["1", "$100", "", "40"], &["2", "$100", "", "12.5"]],
    );

    let err = analyze_costs(&paths, 40).unwrap_err();
    assert!(
        matches!(err, PipelineError::Format { ref column, row: 2, ref value } if column == "cases" && value == "12.5"),
        "expected Format, got: {err:?}"
    );
    assert!(!paths.output.exists());
}

#[test]
fn analyze_keeps_existing_empty_cases() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft", "cases"],
        &[&["1", "$10", "5", ""]],
    );

    let records = analyze_costs(&paths, 40).unwrap();
    assert_eq!(records[0].cases, None);
    assert_eq!(records[0].price_per_sqft, Some(2.0));
}

#[test]
fn analyze_requires_lot_no_and_price() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(&paths, &["sqft"], &[&["5"]]);

    let err = analyze_costs(&paths, 40).unwrap_err();
    assert!(
        matches!(err, PipelineError::MissingColumns { ref columns } if columns == &["Lot No", "Price"]),
        "expected MissingColumns, got: {err:?}"
    );
    assert!(!paths.output.exists());
}

#[test]
fn analyze_bad_sqft_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(
        &paths,
        &["Lot No", "Price", "sqft", "cases"],
        &[&["1", "$10", "5", "1"], &["2", "$10", "lots", "1"]],
    );

    let err = analyze_costs(&paths, 40).unwrap_err();
    assert!(
        matches!(err, PipelineError::Format { ref column, row: 2, .. } if column == "sqft"),
        "expected Format, got: {err:?}"
    );
    assert!(!paths.output.exists());
}

#[test]
fn analyze_empty_input_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(&dir);
    write_input(&paths, &["Lot No", "Price", "sqft", "cases"], &[]);

    let records = analyze_costs(&paths, 40).unwrap();
    assert!(records.is_empty());
    let raw = std::fs::read_to_string(&paths.output).unwrap();
    assert_eq!(raw, "Lot No,Price,sqft,cases,Price/sqft,Price/case\n");
}

#[test]
fn analyze_missing_input_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = analyze_costs(&paths(&dir), 40).unwrap_err();
    assert!(matches!(err, PipelineError::FileNotFound { .. }));
}
