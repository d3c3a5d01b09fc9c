//! Ordered element-matching rules evaluated over a lot's subtree.
//!
//! Class matching follows HTML's multi-valued `class` attribute: an exact
//! rule matches when any class token equals the name, a pattern rule when
//! the regex finds a match in any token or in the whole attribute value.

use regex::Regex;
use scraper::ElementRef;

pub(crate) enum ClassRule {
    Exact(&'static str),
    Pattern(Regex),
}

impl ClassRule {
    /// Case-insensitive pattern rule.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex; callers pass literals.
    pub(crate) fn pattern(pattern: &str) -> Self {
        ClassRule::Pattern(Regex::new(&format!("(?i){pattern}")).expect("valid class regex"))
    }

    fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        match self {
            ClassRule::Exact(name) => value.classes().any(|c| c == *name),
            ClassRule::Pattern(re) => {
                value.classes().any(|c| re.is_match(c))
                    || value.attr("class").is_some_and(|all| re.is_match(all))
            }
        }
    }
}

/// Matches elements with one of `tags` whose class satisfies `class`.
pub(crate) struct ElementRule {
    tags: &'static [&'static str],
    class: ClassRule,
}

impl ElementRule {
    pub(crate) fn new(tags: &'static [&'static str], class: ClassRule) -> Self {
        Self { tags, class }
    }

    pub(crate) fn matches(&self, element: &ElementRef<'_>) -> bool {
        self.tags.contains(&element.value().name()) && self.class.matches(element)
    }
}

/// Every element below `root`, in document order, excluding `root` itself.
pub(crate) fn descendant_elements<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Trimmed text content of `element`.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Tries `rules` in order and returns the text of the first element with
/// non-empty text.
pub(crate) fn first_text(root: ElementRef<'_>, rules: &[ElementRule]) -> Option<String> {
    rules.iter().find_map(|rule| {
        descendant_elements(root)
            .filter(|el| rule.matches(el))
            .map(element_text)
            .find(|text| !text.is_empty())
    })
}
