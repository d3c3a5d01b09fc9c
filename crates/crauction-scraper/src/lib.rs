pub mod client;
pub mod error;
pub mod extract;
pub mod url;

pub use client::AuctionClient;
pub use error::ScraperError;
pub use extract::{extract_lots, ExtractOptions};
pub use url::{resolve_lot_link, validate_auction_url};

use crauction_core::LotRecord;

/// Fetches one auction page and extracts its lots.
///
/// Returns `Ok(None)` when the page has lot elements but none survived
/// parsing and filtering.
///
/// # Errors
///
/// - [`ScraperError::InvalidUrl`] if `url` is not an absolute http(s) URL.
/// - [`ScraperError::Http`] / [`ScraperError::UnexpectedStatus`] if the fetch fails.
/// - [`ScraperError::NoLotsFound`] if the page contains no lot elements.
pub async fn scrape_auction_page(
    client: &AuctionClient,
    url: &str,
    options: &ExtractOptions,
) -> Result<Option<Vec<LotRecord>>, ScraperError> {
    let html = client
        .fetch_page(url)
        .await
        .inspect_err(|e| tracing::error!(url, error = %e, "error fetching auction page"))?;

    let lots = extract_lots(&html, url, options)
        .inspect_err(|e| tracing::error!(url, error = %e, "error extracting lots"))?;

    match &lots {
        Some(records) => tracing::info!(url, lots = records.len(), "extracted lots"),
        None => match options.lot_range {
            Some(range) => tracing::warn!(url, %range, "no valid lots found in range"),
            None => tracing::warn!(url, "no valid lots found on page"),
        },
    }

    Ok(lots)
}
