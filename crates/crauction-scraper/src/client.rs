//! HTTP client for auction pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::url::validate_auction_url;

/// Fetches auction pages with a fixed timeout and a browser-like `User-Agent`.
///
/// Each call issues exactly one GET. Failures are returned as typed errors
/// and never retried.
pub struct AuctionClient {
    client: Client,
}

impl AuctionClient {
    /// Creates an `AuctionClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Validates `url` and returns the body of a single GET to it.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: not an absolute http(s) URL; no request is made.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS or timeout failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = validate_auction_url(url)?;

        tracing::debug!(url = %parsed, "fetching auction page");
        let response = self
            .client
            .get(parsed.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: parsed.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url = %parsed, bytes = body.len(), "fetched auction page");
        Ok(body)
    }
}
