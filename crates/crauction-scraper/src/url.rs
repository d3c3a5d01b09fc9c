//! URL validation and lot-link resolution.

use reqwest::Url;

use crate::error::ScraperError;

/// Parses `url` and checks that it is an absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] describing the first failed check.
pub fn validate_auction_url(url: &str) -> Result<Url, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme \"{}\" is not http or https",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host".to_string()));
    }

    Ok(parsed)
}

/// Turns a lot `href` into an absolute link.
///
/// Site-root-relative hrefs (leading `/`) are prefixed with `site_origin`;
/// anything else is returned unchanged.
#[must_use]
pub fn resolve_lot_link(href: &str, site_origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{href}", site_origin.trim_end_matches('/'))
    } else {
        href.to_owned()
    }
}
