use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no lots found on {url}")]
    NoLotsFound { url: String },
}
