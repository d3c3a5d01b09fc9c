pub mod analysis;
pub mod app_config;
pub mod config;
pub mod lot_range;
pub mod lots;

pub use analysis::AnalysisRecord;
pub use app_config::{AppConfig, DEFAULT_SITE_ORIGIN, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use lot_range::LotRange;
pub use lots::{LotAttribute, LotAttributes, LotRecord};

use thiserror::Error;

/// Default file name for the full extraction output.
pub const DATA_ALL_FILE: &str = "data_all.csv";
/// Default file name for the projected (trimmed) lot table.
pub const DATA_TRIMMED_FILE: &str = "data_trimmed.csv";
/// Default file name for the table with derived square footage.
pub const DATA_CLEAN_FILE: &str = "data_clean.csv";
/// Default file name for the final price analysis.
pub const DATA_ANALYSIS_FILE: &str = "data_analysis.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid lot range \"{input}\": {reason}")]
    InvalidLotRange { input: String, reason: String },
}
