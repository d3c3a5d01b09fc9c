use serde::Serialize;

use crate::lots::{COL_LOT_NO, COL_PRICE};

pub const COL_SQFT: &str = "sqft";
pub const COL_CASES: &str = "cases";
pub const COL_PRICE_PER_SQFT: &str = "Price/sqft";
pub const COL_PRICE_PER_CASE: &str = "Price/case";

/// One row of `data_analysis.csv`.
///
/// `None` is written as an empty cell. `cases` is a whole count. Ratios are
/// `None` whenever their divisor is missing or zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    #[serde(rename = "Lot No")]
    pub lot_no: String,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    #[serde(rename = "sqft")]
    pub sqft: Option<f64>,
    #[serde(rename = "cases")]
    pub cases: Option<u32>,
    #[serde(rename = "Price/sqft")]
    pub price_per_sqft: Option<f64>,
    #[serde(rename = "Price/case")]
    pub price_per_case: Option<f64>,
}

impl AnalysisRecord {
    /// Header row of the analysis file.
    pub const COLUMNS: [&'static str; 6] = [
        COL_LOT_NO,
        COL_PRICE,
        COL_SQFT,
        COL_CASES,
        COL_PRICE_PER_SQFT,
        COL_PRICE_PER_CASE,
    ];

    /// Builds a record, deriving both ratios from the inputs.
    #[must_use]
    pub fn new(lot_no: String, price: Option<f64>, sqft: Option<f64>, cases: Option<u32>) -> Self {
        Self {
            price_per_sqft: ratio(price, sqft),
            price_per_case: ratio(price, cases.map(f64::from)),
            lot_no,
            price,
            sqft,
            cases,
        }
    }
}

/// `numerator / divisor`, or `None` when either side is missing or the
/// divisor is zero.
#[must_use]
pub fn ratio(numerator: Option<f64>, divisor: Option<f64>) -> Option<f64> {
    match (numerator, divisor) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}
