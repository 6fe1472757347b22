//! Causelist extraction engine.
//!
//! Turns a court causelist HTML page into an ordered list of [`CaseRecord`]s.
//! The work happens in passes over a single [`DocumentIndex`]:
//!
//! 1. [`index`]: every element in document order, with its text cached.
//! 2. [`segment`]: court sections bounded by "Court No : N" markers.
//! 3. [`stage`]: the hearing stage of each section.
//! 4. [`rows`]: case rows from the tables inside each section.
//! 5. [`fallback`]: a linear pass over all rows when no court marker exists.
//!
//! Extraction never fails. Malformed markup is absorbed by the HTML parser
//! and a page without recognizable rows produces an empty list.

pub mod fallback;
pub mod index;
pub mod patterns;
pub mod rows;
pub mod segment;
pub mod stage;
pub mod summary;
pub mod types;

use scraper::Html;

pub use index::DocumentIndex;
pub use summary::summarize_by_court;
pub use types::{CaseRecord, CourtSection, CourtSummary, UNKNOWN};

/// Extract every case record from a causelist document.
///
/// Records come out in section order, then row order within a section.
/// Each row in a section is stamped with the stage resolved for the whole
/// section (see [`stage::detect_stage`]), not the stage current at the row.
pub fn extract_cases(html: &str) -> Vec<CaseRecord> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);
    let index = DocumentIndex::build(&document);
    let sections = segment::find_court_sections(&index);

    if sections.is_empty() {
        return fallback::extract_fallback(&index);
    }

    sections
        .iter()
        .flat_map(|section| {
            let span = index.span(section.start, section.end);
            let stage = stage::detect_stage(span);
            rows::section_rows(span, &section.court_no, &stage)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/causelist.html");

    fn record(court_no: &str, item_no: &str, case_no: &str, title: &str, stage: &str) -> CaseRecord {
        CaseRecord {
            court_no: court_no.to_string(),
            item_no: item_no.to_string(),
            case_no: case_no.to_string(),
            case_title: title.to_string(),
            stage: stage.to_string(),
        }
    }

    // ============================================================================
    // extract_cases: sectioned documents
    // ============================================================================

    #[test]
    fn test_extract_cases_end_to_end_example() {
        let html = "<div>Court No : 3</div><table><tr><td>1</td><td>CRL.M.PET. 5/2024</td><td>State vs Kumar</td></tr></table>";
        assert_eq!(
            extract_cases(html),
            vec![record("3", "1", "CRL.M.PET. 5/2024", "State vs Kumar", "Unknown")]
        );
    }

    #[test]
    fn test_extract_cases_fixture() {
        let stay = "FOR FRESH ADMISSION WITH STAY/BAIL";
        assert_eq!(
            extract_cases(FIXTURE),
            vec![
                record("1", "1", "CRL.M.PET. 101/2024", "State of Punjab vs. Ravi Kumar", stay),
                record("1", "With 1", "CRL.M.(BAIL) 55/2024", "Suresh vs State", stay),
                record("1", "2", "C.W. 2210/2023", "Harjit Singh vs Union of India", stay),
                record("12", "3", "FIR 77/2022", "Mohan Lal vs State", "FOR HEARING"),
                record(
                    "12",
                    "5",
                    "Arbitration Appeal 14",
                    "Green Builders vs Municipal Corporation",
                    "FOR HEARING"
                ),
            ]
        );
    }

    #[test]
    fn test_extract_cases_stage_applies_to_whole_section() {
        // The stage heading sits below the first row but still stamps it.
        let html = "<div>Court No : 2</div>\
            <table><tr><td>1</td><td>C.W. 1/2020</td><td>Early vs Row</td></tr></table>\
            <p>FOR HEARING</p>\
            <table><tr><td>2</td><td>C.W. 2/2020</td><td>Late vs Row</td></tr></table>";

        let records = extract_cases(html);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.stage == "FOR HEARING"));
    }

    #[test]
    fn test_extract_cases_stage_resets_per_section() {
        let html = "<div>Court No : 1</div><p>FOR ORDERS</p>\
            <table><tr><td>1</td><td>C.W. 1/2020</td><td>First vs Court</td></tr></table>\
            <div>Court No : 2</div>\
            <table><tr><td>1</td><td>C.W. 2/2020</td><td>Second vs Court</td></tr></table>";

        let records = extract_cases(html);
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].court_no.as_str(), records[0].stage.as_str()), ("1", "FOR ORDERS"));
        assert_eq!((records[1].court_no.as_str(), records[1].stage.as_str()), ("2", "Unknown"));
    }

    #[test]
    fn test_extract_cases_marker_inside_table() {
        // Element text is concatenated without separators, so the marker cell
        // must not end right before the next row's item digits.
        let html = "<table>\
            <tr><td colspan=\"3\">Court No : 9 (Main Block)</td></tr>\
            <tr><td>1</td><td>C.R. 4/2018</td><td>Inside vs Table</td></tr>\
            </table>";

        let records = extract_cases(html);
        assert_eq!(records, vec![record("9", "1", "C.R. 4/2018", "Inside vs Table", "Unknown")]);
    }

    #[test]
    fn test_extract_cases_rejects_header_rows() {
        let html = "<div>Court No : 1</div><table>\
            <tr><td>1</td><td>C.W. 1/2020</td><td>Name of Advocate</td></tr>\
            </table>";
        assert!(extract_cases(html).is_empty());
    }

    // ============================================================================
    // extract_cases: fallback and degenerate input
    // ============================================================================

    #[test]
    fn test_extract_cases_fallback_without_markers() {
        let html = "<table>\
            <tr><td>1</td><td>C.W. 1/2020 (extra)</td><td>No Marker vs Anyone</td></tr>\
            </table>";

        let records = extract_cases(html);
        assert_eq!(
            records,
            vec![record("Unknown", "1", "C.W. 1/2020 (extra)", "No Marker vs Anyone", "Unknown")]
        );
    }

    #[test]
    fn test_extract_cases_empty_input() {
        assert!(extract_cases("").is_empty());
        assert!(extract_cases("   \n\t ").is_empty());
    }

    #[test]
    fn test_extract_cases_is_deterministic() {
        assert_eq!(extract_cases(FIXTURE), extract_cases(FIXTURE));
    }

    #[test]
    fn test_extract_cases_never_exceeds_candidate_rows() {
        let document = Html::parse_document(FIXTURE);
        let selector = scraper::Selector::parse("tr").unwrap();
        let cell = scraper::Selector::parse("td").unwrap();
        let candidates = document
            .select(&selector)
            .filter(|row| row.select(&cell).count() >= 3)
            .count();

        assert!(extract_cases(FIXTURE).len() <= candidates);
    }

    #[test]
    fn test_extract_cases_tolerates_garbage() {
        let html = "<<<>>></td></tr><table><tr><td>1<td>C.W. 1/2020<td>Unclosed vs Cells";
        let records = extract_cases(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_title, "Unclosed vs Cells");
    }

    #[test]
    fn test_case_record_serializes_camel_case() {
        let json = serde_json::to_value(record("3", "1", "C.W. 1/2020", "Ram vs Shyam", "Unknown"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "courtNo": "3",
                "itemNo": "1",
                "caseNo": "C.W. 1/2020",
                "caseTitle": "Ram vs Shyam",
                "stage": "Unknown",
            })
        );
    }
}
