//! Stage handlers called from `main`.
//!
//! Each handler resolves its file paths against the configured data
//! directory, runs one library stage and prints a one-line summary.

use std::path::PathBuf;

use crauction_core::{
    AppConfig, LotRange, DATA_ALL_FILE, DATA_ANALYSIS_FILE, DATA_CLEAN_FILE, DATA_TRIMMED_FILE,
};
use crauction_pipeline::{
    analyze_costs, derive_sqft, render_analysis, save_lots, trim_lots, StagePaths,
};
use crauction_scraper::{scrape_auction_page, AuctionClient, ExtractOptions};

fn stage_paths(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    default_input: &str,
    default_output: &str,
) -> StagePaths {
    StagePaths::new(
        input.unwrap_or_else(|| config.data_path(default_input)),
        output.unwrap_or_else(|| config.data_path(default_output)),
    )
}

/// Scrapes `url` and saves the lots. Returns `false` when the page had no
/// usable lots, in which case nothing is written.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the page cannot be
/// fetched, it has no lot elements, or the lot table cannot be written.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    url: &str,
    lots: Option<LotRange>,
    output: Option<PathBuf>,
) -> anyhow::Result<bool> {
    let client = AuctionClient::new(config.request_timeout_secs, &config.user_agent)?;
    let options = ExtractOptions {
        site_origin: config.site_origin.clone(),
        lot_range: lots,
    };
    let output = output.unwrap_or_else(|| config.data_path(DATA_ALL_FILE));

    let Some(records) = scrape_auction_page(&client, url, &options).await? else {
        println!("no valid lots found on {url}; nothing saved");
        return Ok(false);
    };

    save_lots(&output, &records)?;
    println!("saved {} lots to {}", records.len(), output.display());
    Ok(true)
}

pub(crate) fn run_trim(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let paths = stage_paths(config, input, output, DATA_ALL_FILE, DATA_TRIMMED_FILE);
    let table = trim_lots(&paths)?;
    println!("trimmed {} lots to {}", table.len(), paths.output.display());
    Ok(())
}

pub(crate) fn run_sqft(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let paths = stage_paths(config, input, output, DATA_TRIMMED_FILE, DATA_CLEAN_FILE);
    let table = derive_sqft(&paths, config.default_cases)?;
    println!(
        "saved {} lots with sqft to {}",
        table.len(),
        paths.output.display()
    );
    Ok(())
}

/// Runs the cost analysis and prints the resulting table to stdout.
pub(crate) fn run_analyze(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let paths = stage_paths(config, input, output, DATA_CLEAN_FILE, DATA_ANALYSIS_FILE);
    let records = analyze_costs(&paths, config.default_cases)?;
    print!("{}", render_analysis(&records));
    Ok(())
}

/// Scrape, trim and sqft against the default data files, optionally
/// followed by the cost analysis. Stops after scraping if no lots were saved.
pub(crate) async fn run_all(
    config: &AppConfig,
    url: &str,
    lots: Option<LotRange>,
    analyze: bool,
) -> anyhow::Result<()> {
    if !run_scrape(config, url, lots, None).await? {
        return Ok(());
    }
    run_trim(config, None, None)?;
    run_sqft(config, None, None)?;
    if analyze {
        run_analyze(config, None, None)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "stages_test.rs"]
mod tests;
