//! Labeled attributes parsed out of a lot's description text.

use std::sync::LazyLock;

use crauction_core::{LotAttribute, LotAttributes};
use regex::Regex;
use scraper::ElementRef;

use super::rules::{descendant_elements, element_text, ClassRule, ElementRule};

/// Elements whose text makes up the description blob.
static DESCRIPTION_RULE: LazyLock<ElementRule> = LazyLock::new(|| {
    ElementRule::new(
        &["div", "p", "span"],
        ClassRule::pattern("description|details|lot.*|info.*"),
    )
});

static ATTRIBUTE_PATTERNS: LazyLock<Vec<(LotAttribute, Regex)>> = LazyLock::new(|| {
    LotAttribute::ALL
        .iter()
        .map(|&attribute| {
            let pattern = format!(r"(?i){}[:\s]*([^\n,;]+)", label_pattern(attribute));
            let re = Regex::new(&pattern).expect("valid attribute regex");
            (attribute, re)
        })
        .collect()
});

/// Regex matching the label that precedes an attribute's value.
fn label_pattern(attribute: LotAttribute) -> &'static str {
    match attribute {
        LotAttribute::Upc => "UPC",
        LotAttribute::Brand => "Brand",
        LotAttribute::Model => "Model",
        LotAttribute::ColorFamily => "Color Family",
        LotAttribute::ColorFinish => "Color/Finish",
        LotAttribute::CommercialResidential => r"Commercial\s*/\s*Residential",
        LotAttribute::EdgeType => "Edge Type",
        LotAttribute::PiecesPerCase => "Pieces Per Case",
        LotAttribute::PlankLength => "Plank Length",
        LotAttribute::PlankWidth => "Plank Width",
        LotAttribute::ProductWeightLb => r"Product Weight\s*\(lb\.\)",
        LotAttribute::ApproximatePlankSizeIn => r"Approximate Plank Size\s*\(in\.\)",
        LotAttribute::ProductLengthIn => r"Product Length\s*\(in\.\)",
        LotAttribute::ProductThicknessMm => r"Product Thickness\s*\(mm\)",
        LotAttribute::ProductWidthIn => r"Product Width\s*\(in\.\)",
        LotAttribute::WearLayerThicknessMil => r"Wear Layer Thickness\s*\(mil\)",
    }
}

/// Space-joined text of every description-like element under `lot`.
pub(crate) fn description_text(lot: ElementRef<'_>) -> String {
    descendant_elements(lot)
        .filter(|el| DESCRIPTION_RULE.matches(el))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs every attribute pattern against `text`, keeping the first match of each.
pub(crate) fn extract_attributes(text: &str) -> LotAttributes {
    let mut attributes = LotAttributes::default();
    for (attribute, re) in ATTRIBUTE_PATTERNS.iter() {
        if let Some(value) = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
        {
            attributes.set(*attribute, value);
        }
    }
    attributes
}
