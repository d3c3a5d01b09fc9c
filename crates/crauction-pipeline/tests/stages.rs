//! Runs every CSV stage in sequence over files in a temp directory.

use crauction_core::analysis::{COL_CASES, COL_SQFT};
use crauction_core::{LotAttribute, LotRecord};
use crauction_pipeline::{
    analyze_costs, derive_sqft, read_table, render_analysis, save_lots, trim_lots, PipelineError,
    StagePaths,
};

fn lot(id: &str, no: &str, title: &str, price: &str) -> LotRecord {
    let mut record = LotRecord::new(id, no);
    record.title = title.to_owned();
    record.price = price.to_owned();
    record.details_link = format!("https://www.example-auction.test/lot/{id}");
    record
}

#[test]
fn full_pipeline_produces_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let all = dir.path().join("data_all.csv");
    let trimmed = dir.path().join("data_trimmed.csv");
    let clean = dir.path().join("data_clean.csv");
    let analysis = dir.path().join("data_analysis.csv");

    let mut first = lot("a1", "101", "Oak Plank Approx 1250 SQ FT", "$1,000.00");
    first.attributes.set(LotAttribute::Brand, "Mohawk");
    let second = lot("b2", "102", "Box of trim", "$25");
    save_lots(&all, &[first, second]).unwrap();

    let trimmed_table = trim_lots(&StagePaths::new(&all, &trimmed)).unwrap();
    assert_eq!(trimmed_table.len(), 2);
    let brands: Vec<&str> = trimmed_table.column("Brand").unwrap().collect();
    assert_eq!(brands, ["Mohawk", ""]);

    let clean_table = derive_sqft(&StagePaths::new(&trimmed, &clean), 40).unwrap();
    let sqft: Vec<&str> = clean_table.column(COL_SQFT).unwrap().collect();
    assert_eq!(sqft, ["1250.0", ""]);
    let cases: Vec<&str> = clean_table.column(COL_CASES).unwrap().collect();
    assert_eq!(cases, ["40", "40"]);

    let records = analyze_costs(&StagePaths::new(&clean, &analysis), 40).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].price_per_sqft, Some(0.8));
    assert_eq!(records[0].price_per_case, Some(25.0));
    assert_eq!(records[1].price_per_sqft, None);
    assert_eq!(records[1].price_per_case, Some(0.625));

    let on_disk = read_table(&analysis).unwrap();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(on_disk.rows()[1], ["102", "25.0", "", "40", "", "0.625"]);

    let report = render_analysis(&records);
    assert!(report.lines().any(|l| l.starts_with("101")));
}

#[test]
fn rerunning_a_stage_replaces_its_output() {
    let dir = tempfile::tempdir().unwrap();
    let all = dir.path().join("data_all.csv");
    let trimmed = dir.path().join("data_trimmed.csv");

    save_lots(&all, &[lot("a", "1", "x", "$1"), lot("b", "2", "y", "$2")]).unwrap();
    trim_lots(&StagePaths::new(&all, &trimmed)).unwrap();
    save_lots(&all, &[lot("c", "3", "z", "$3")]).unwrap();
    let table = trim_lots(&StagePaths::new(&all, &trimmed)).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(read_table(&trimmed).unwrap(), table);
}

#[test]
fn failed_stage_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let trimmed = dir.path().join("data_trimmed.csv");
    let clean = dir.path().join("data_clean.csv");

    let err = derive_sqft(&StagePaths::new(&trimmed, &clean), 40).unwrap_err();
    assert!(matches!(err, PipelineError::FileNotFound { .. }));
    assert!(!clean.exists());
}
