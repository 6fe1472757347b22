use serde::{Deserialize, Serialize};

/// Placeholder used when no court marker or stage phrase was seen.
pub const UNKNOWN: &str = "Unknown";

/// One case row extracted from a causelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Court number as written in the document, or `"Unknown"`.
    pub court_no: String,
    /// Plain item number, or `"With N"` for a connected case.
    pub item_no: String,
    /// Citation-like case number.
    pub case_no: String,
    /// Whitespace-normalized case title.
    pub case_title: String,
    /// Hearing stage of the enclosing court section, or `"Unknown"`.
    pub stage: String,
}

/// A span of the document index that belongs to one court.
///
/// `start` is inclusive, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtSection {
    pub court_no: String,
    pub start: usize,
    pub end: usize,
}

/// Per-court roll-up of extracted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSummary {
    pub court_no: String,
    pub count: usize,
    /// Distinct stages in first-seen order.
    pub stages: Vec<String>,
}
