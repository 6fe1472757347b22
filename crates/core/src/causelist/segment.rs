use super::index::DocumentIndex;
use super::patterns::court_number;
use super::types::CourtSection;

/// Split the document into court sections at every element whose text
/// contains a "Court No : N" marker.
///
/// Ancestors of a marker contain the same text, so one visible heading
/// usually yields several consecutive boundaries (`html`, `body`, the
/// wrapper, the heading itself). Those boundaries are kept: each produces
/// a short section that holds no tables, and the innermost one owns the
/// content that follows it.
pub fn find_court_sections(index: &DocumentIndex<'_>) -> Vec<CourtSection> {
    let markers: Vec<(usize, &str)> = index
        .elements()
        .iter()
        .enumerate()
        .filter_map(|(i, el)| court_number(&el.text).map(|court_no| (i, court_no)))
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(n, &(start, court_no))| CourtSection {
            court_no: court_no.to_string(),
            start,
            end: markers
                .get(n + 1)
                .map(|&(next, _)| next)
                .unwrap_or(index.len()),
        })
        .collect()
}
