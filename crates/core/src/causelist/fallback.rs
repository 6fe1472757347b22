use super::index::{DocumentIndex, IndexedElement};
use super::patterns::{court_number, ITEM_NO_RE, LOOSE_STAGE_RE};
use super::rows::{cell_text, normalize_whitespace, row_cells, MIN_CELLS};
use super::types::{CaseRecord, UNKNOWN};

/// Running court/stage context carried across rows in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackState {
    pub court_no: String,
    pub stage: String,
}

impl Default for FallbackState {
    fn default() -> Self {
        Self {
            court_no: UNKNOWN.to_string(),
            stage: UNKNOWN.to_string(),
        }
    }
}

impl FallbackState {
    /// Update the context from a row's full text.
    pub fn observe(self, row_text: &str) -> Self {
        let court_no = court_number(row_text)
            .map(str::to_string)
            .unwrap_or(self.court_no);
        let stage = LOOSE_STAGE_RE
            .find(row_text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or(self.stage);

        Self { court_no, stage }
    }
}

/// Record for a row under the running context, without citation refinement
/// or connected-case support.
pub fn parse_fallback_row(row: &IndexedElement<'_>, state: &FallbackState) -> Option<CaseRecord> {
    let cells = row_cells(row.element);
    if cells.len() < MIN_CELLS {
        return None;
    }

    let item_no = cell_text(cells[0]);
    let case_no = cell_text(cells[1]);
    let title = cell_text(cells[2]);

    if !ITEM_NO_RE.is_match(&item_no) || case_no.is_empty() || title.is_empty() {
        return None;
    }

    Some(CaseRecord {
        court_no: state.court_no.clone(),
        item_no,
        case_no,
        case_title: normalize_whitespace(&title),
        stage: state.stage.clone(),
    })
}

/// Single linear pass over every `tr` in the document.
///
/// Used when the document carries no court markers at all.
pub fn extract_fallback(index: &DocumentIndex<'_>) -> Vec<CaseRecord> {
    let (_, records) = index.by_tag("tr").fold(
        (FallbackState::default(), Vec::new()),
        |(state, mut records), row| {
            let state = state.observe(&row.text);
            if let Some(record) = parse_fallback_row(row, &state) {
                records.push(record);
            }
            (state, records)
        },
    );

    records
}
