use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn build_app_config_default_timeout_is_ten_seconds() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.default_cases, 40);
    assert!(cfg.log_file.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_LOG_LEVEL", "debug");
    map.insert("CRAUCTION_LOG_FILE", "/tmp/crauction.log");
    map.insert("CRAUCTION_DATA_DIR", "/tmp/auction");
    map.insert("CRAUCTION_USER_AGENT", "custom-agent/2.0");
    map.insert("CRAUCTION_REQUEST_TIMEOUT_SECS", "30");
    map.insert("CRAUCTION_DEFAULT_CASES", "24");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/crauction.log")));
    assert_eq!(cfg.data_dir, PathBuf::from("/tmp/auction"));
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.default_cases, 24);
}

#[test]
fn build_app_config_blank_log_file_means_stderr() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_LOG_FILE", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.log_file.is_none());
}

#[test]
fn build_app_config_strips_trailing_slash_from_origin() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_SITE_ORIGIN", "https://staging.crauctions.com/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_origin, "https://staging.crauctions.com");
}

#[test]
fn build_app_config_rejects_origin_without_scheme() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_SITE_ORIGIN", "bids.crauctions.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRAUCTION_SITE_ORIGIN"),
        "expected InvalidEnvVar(CRAUCTION_SITE_ORIGIN), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRAUCTION_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CRAUCTION_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_rejects_negative_default_cases() {
    let mut map = HashMap::new();
    map.insert("CRAUCTION_DEFAULT_CASES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRAUCTION_DEFAULT_CASES"),
        "expected InvalidEnvVar(CRAUCTION_DEFAULT_CASES), got: {result:?}"
    );
}

#[test]
fn data_path_joins_data_dir() {
    let cfg = AppConfig {
        data_dir: PathBuf::from("/srv/auction"),
        ..AppConfig::default()
    };
    assert_eq!(
        cfg.data_path(crate::DATA_CLEAN_FILE),
        PathBuf::from("/srv/auction/data_clean.csv")
    );
}
