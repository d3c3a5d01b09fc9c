use std::path::{Path, PathBuf};

/// Origin every site-root-relative lot link is resolved against.
pub const DEFAULT_SITE_ORIGIN: &str = "https://bids.crauctions.com";

/// Browser-like `User-Agent`; the auction site serves a stripped page to
/// obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"crauction_scraper=debug"`.
    pub log_level: String,
    /// Optional log sink. Logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
    /// Directory holding the intermediate CSV files.
    pub data_dir: PathBuf,
    pub site_origin: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Value written into a `cases` column that a stage has to add.
    pub default_cases: u32,
}

impl AppConfig {
    /// Resolves a data file name against [`AppConfig::data_dir`].
    #[must_use]
    pub fn data_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            data_dir: PathBuf::from("."),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 10,
            default_cases: 40,
        }
    }
}
