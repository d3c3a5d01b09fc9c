//! Lot extraction from a parsed auction page.
//!
//! Each `div.lot[data-lotnumber]` element becomes one [`LotRecord`]. Title
//! and price come from ordered fallback rules; labeled attributes are
//! regex-parsed out of the lot's description text.

mod attributes;
mod rules;

use std::sync::LazyLock;

use crauction_core::{LotRange, LotRecord, DEFAULT_SITE_ORIGIN};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::url::resolve_lot_link;
use attributes::{description_text, extract_attributes};
use rules::{descendant_elements, first_text, ClassRule, ElementRule};

static LOT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.lot[data-lotnumber]").expect("valid lot selector"));

static TITLE_RULES: LazyLock<[ElementRule; 2]> = LazyLock::new(|| {
    [
        ElementRule::new(&["div"], ClassRule::Exact("title")),
        ElementRule::new(&["div"], ClassRule::pattern("lot.*title.*")),
    ]
});

static PRICE_RULES: LazyLock<[ElementRule; 3]> = LazyLock::new(|| {
    [
        ElementRule::new(&["span"], ClassRule::Exact("current-bid")),
        ElementRule::new(&["div"], ClassRule::Exact("winning-bid-amount")),
        ElementRule::new(&["span"], ClassRule::pattern("bid.*")),
    ]
});

/// Knobs for [`extract_lots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Prefix for site-root-relative lot links.
    pub site_origin: String,
    /// Keep only lots numbered within this window. `None` keeps every lot.
    pub lot_range: Option<LotRange>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_owned(),
            lot_range: None,
        }
    }
}

/// Extracts every lot on the page.
///
/// Lots whose number does not parse, or falls outside
/// [`ExtractOptions::lot_range`], are skipped. Returns `Ok(None)` when lot
/// elements exist but all of them were skipped.
///
/// # Errors
///
/// Returns [`ScraperError::NoLotsFound`] if the page has no lot elements at all.
pub fn extract_lots(
    html: &str,
    page_url: &str,
    options: &ExtractOptions,
) -> Result<Option<Vec<LotRecord>>, ScraperError> {
    let document = Html::parse_document(html);
    let lot_elements: Vec<ElementRef<'_>> = document.select(&LOT_SELECTOR).collect();

    if lot_elements.is_empty() {
        tracing::error!(page_url, "no lot elements found on the page");
        return Err(ScraperError::NoLotsFound {
            url: page_url.to_owned(),
        });
    }
    tracing::debug!(page_url, candidates = lot_elements.len(), "found lot elements");

    let records: Vec<LotRecord> = lot_elements
        .into_iter()
        .filter_map(|lot| extract_lot(lot, options))
        .collect();

    if records.is_empty() {
        return Ok(None);
    }
    Ok(Some(records))
}

fn extract_lot(lot: ElementRef<'_>, options: &ExtractOptions) -> Option<LotRecord> {
    let lot_id = lot.value().attr("data-lotid").unwrap_or_default();
    let lot_number = lot.value().attr("data-lotnumber").unwrap_or_default();

    let Ok(number) = lot_number.trim().parse::<i64>() else {
        tracing::warn!(lot_number, "invalid lot number");
        return None;
    };

    if let Some(range) = options.lot_range {
        if !range.contains(number) {
            tracing::debug!(lot_number, %range, "skipping lot outside range");
            return None;
        }
    }

    let mut record = LotRecord::new(lot_id, lot_number);

    if let Some(title) = first_text(lot, TITLE_RULES.as_slice()) {
        tracing::debug!(lot_number, title = %preview(&title), "found title");
        record.title = title;
    } else {
        tracing::warn!(lot_number, "no title found for lot");
    }

    if let Some(href) = descendant_elements(lot)
        .filter(|el| el.value().name() == "a")
        .find_map(|el| el.value().attr("href"))
    {
        record.details_link = resolve_lot_link(href, &options.site_origin);
        tracing::debug!(lot_number, link = %record.details_link, "found lot link");
    }

    if let Some(price) = first_text(lot, PRICE_RULES.as_slice()) {
        tracing::debug!(lot_number, price = %price, "found price");
        record.price = price;
    } else {
        tracing::warn!(lot_number, "no price found for lot");
    }

    let description = description_text(lot);
    if !description.is_empty() {
        record.attributes = extract_attributes(&description);
        tracing::debug!(
            lot_number,
            attributes = record.attributes.present_count(),
            "parsed description attributes"
        );
    }

    Some(record)
}

/// First 50 characters of `text`, for log lines.
fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
