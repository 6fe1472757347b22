use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::index::{element_text, IndexedElement};
use super::patterns::{
    first_match, CITATION_RULES, CONNECTED_ITEM_RE, DIGITS_RE, HEADER_TITLE_RE, ITEM_NO_RE,
};
use super::types::CaseRecord;

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Minimum number of `td` cells for a row to be considered a case row.
pub const MIN_CELLS: usize = 3;

/// Unicode whitespace plus the byte order mark, which browsers also treat as space.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Collapse every whitespace run to a single space and trim.
pub fn normalize_whitespace(s: &str) -> String {
    s.split(is_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title length in UTF-16 code units, the unit browsers report.
fn title_len(title: &str) -> usize {
    title.encode_utf16().count()
}

/// All `td` descendants of a row, in document order.
pub fn row_cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.select(&CELL_SELECTOR).collect()
}

/// Trimmed text of a cell.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    element_text(cell).trim_matches(is_space).to_string()
}

/// Item number of a case row.
///
/// Accepts a bare number, or "With N" (any spacing, any case) which is
/// normalized to `"With N"`.
pub fn parse_item_no(cell: &str) -> Option<String> {
    if ITEM_NO_RE.is_match(cell) {
        return Some(cell.to_string());
    }

    let collapsed = normalize_whitespace(cell);
    if CONNECTED_ITEM_RE.is_match(&collapsed) {
        return DIGITS_RE
            .find(&collapsed)
            .map(|digits| format!("With {}", digits.as_str()));
    }

    None
}

/// Case number of a row's second cell.
///
/// Link labels take precedence, then the first citation rule that matches,
/// then the normalized cell text.
pub fn extract_case_no(cell: ElementRef<'_>, text: &str) -> String {
    let links: Vec<ElementRef<'_>> = cell.select(&LINK_SELECTOR).collect();
    if !links.is_empty() {
        return links
            .into_iter()
            .map(element_text)
            .collect::<String>()
            .trim()
            .to_string();
    }

    match first_match(&CITATION_RULES, text) {
        Some((_, matched)) => matched.to_string(),
        None => normalize_whitespace(text),
    }
}

/// Titles that belong to header or stage rows rather than cases.
pub fn is_header_title(title: &str) -> bool {
    HEADER_TITLE_RE.is_match(title)
}

/// Build a record from a table row, or `None` when the row is not a case.
pub fn parse_case_row(row: ElementRef<'_>, court_no: &str, stage: &str) -> Option<CaseRecord> {
    let cells = row_cells(row);
    if cells.len() < MIN_CELLS {
        return None;
    }

    let item_text = cell_text(cells[0]);
    let case_text = cell_text(cells[1]);
    let title_text = cell_text(cells[2]);

    let item_no = parse_item_no(&item_text)?;
    if case_text.is_empty() || title_text.is_empty() {
        return None;
    }

    let case_no = extract_case_no(cells[1], &case_text);
    let case_title = normalize_whitespace(&title_text);

    if case_no.is_empty() || title_len(&case_title) <= 3 || is_header_title(&case_title) {
        return None;
    }

    Some(CaseRecord {
        court_no: court_no.to_string(),
        item_no,
        case_no,
        case_title,
        stage: stage.to_string(),
    })
}

/// Case rows of every table inside a court section's span.
pub fn section_rows(
    elements: &[IndexedElement<'_>],
    court_no: &str,
    stage: &str,
) -> Vec<CaseRecord> {
    elements
        .iter()
        .filter(|el| el.tag() == "table")
        .flat_map(|table| table.element.select(&ROW_SELECTOR))
        .filter_map(|row| parse_case_row(row, court_no, stage))
        .collect()
}
