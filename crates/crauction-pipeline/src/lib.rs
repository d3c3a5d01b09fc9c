//! CSV stages that turn raw lot extractions into a price analysis.
//!
//! Every stage reads one file, builds its whole output in memory and only
//! then rewrites its output file, so a failed stage never leaves a partial
//! file behind.

pub mod cost;
pub mod error;
pub mod lots;
pub mod report;
pub mod sqft;
pub mod table;
pub mod trim;

pub use cost::{analyze_costs, clean_price};
pub use error::PipelineError;
pub use lots::save_lots;
pub use report::render_analysis;
pub use sqft::{derive_sqft, parse_sqft};
pub use table::{read_table, write_table, Table};
pub use trim::trim_lots;

use std::path::PathBuf;

/// Input and output file of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl StagePaths {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Renders a number the way the CSV writer does: integral values keep a
/// trailing `.0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
