use super::index::IndexedElement;
use super::patterns::{first_match, STAGE_RULES};
use super::types::UNKNOWN;

/// Stage phrase of a single element's text, highest-priority rule first.
pub fn match_stage(text: &str) -> Option<&str> {
    first_match(&STAGE_RULES, text).map(|(_, matched)| matched)
}

/// Resolve the stage of a court section.
///
/// Every element in the span is tested; a later match replaces an earlier
/// one, so the last matching element decides. Sections without any stage
/// phrase resolve to `"Unknown"`.
pub fn detect_stage(elements: &[IndexedElement<'_>]) -> String {
    elements
        .iter()
        .fold(None, |current, el| match_stage(&el.text).or(current))
        .unwrap_or(UNKNOWN)
        .to_string()
}
