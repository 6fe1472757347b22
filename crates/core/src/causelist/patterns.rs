//! Regex tables shared by the extraction passes.
//!
//! Stage phrases and citation formats are ordered rule tables: callers walk
//! them top to bottom and stop at the first rule that matches.

use std::sync::LazyLock;

use regex::Regex;

/// A named pattern in a prioritized rule table.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
}

impl Rule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    /// Trimmed text of the leftmost match, if any.
    pub fn apply<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str().trim())
    }
}

/// Run `text` through `rules` and return the first rule's match.
pub fn first_match<'r, 't>(rules: &'r [Rule], text: &'t str) -> Option<(&'r Rule, &'t str)> {
    rules
        .iter()
        .find_map(|rule| rule.apply(text).map(|matched| (rule, matched)))
}

pub static COURT_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Court\s+No\s*:\s*([0-9]+)").unwrap());

pub static ITEM_NO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub static CONNECTED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^With\s*[0-9]+$").unwrap());

pub static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

pub static HEADER_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:FOR\s+|Name\s+of\s+Advocate|Title\s+of)").unwrap());

/// Looser stage phrase used when the document has no court markers.
pub static LOOSE_STAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)FOR\s+[A-Z\s]+(?:WITH\s+[A-Z/]+)?").unwrap());

pub static STAGE_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "fresh_admission_stay_bail",
            r"(?i)FOR\s+FRESH\s+ADMISSION\s+WITH\s+STAY/BAIL",
        ),
        Rule::new(
            "orders_interim_applications",
            r"(?i)FOR\s+ORDERS\s+ON\s+INTERIM\s+APPLICATIONS",
        ),
        Rule::new("hearing", r"(?i)FOR\s+HEARING"),
        Rule::new(
            "orders",
            r"(?i)FOR\s+ORDERS\s*(?:\s*-\s*439\s*\(\s*CR\.P\.C\.\s*\))?",
        ),
        Rule::new(
            "admission_notice_served",
            r"(?i)FOR\s+ADMISSION\s+WITH\s+NOTICE\s+SERVED\s*-\s*REPLY\s+FILED",
        ),
        Rule::new("pil_matters", r"(?i)PIL\s+MATTERS[^<]*?MATTERS"),
        Rule::new("criminal_misc", r"(?i)CRIMINAL\s+MISC[^<]*?MENTIONING"),
        Rule::new(
            "civil_writ_petitions",
            r"(?i)CIVIL\s+WRIT\s+PETITIONS[^<]*?MATTERS",
        ),
        Rule::new("regular_bail", r"(?i)REGULAR\s+BAIL\s+MATTERS[^<]*?MATTERS"),
    ]
});

pub static CITATION_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("crl_m_pet", r"(?i)CRL\.M\.PET\.\s*[0-9]+/[0-9]+"),
        Rule::new("crl_m_bail", r"(?i)CRL\.M\.\(BAIL\)\s*[0-9]+/[0-9]+"),
        Rule::new("civil_writ", r"(?i)C\.W\.\s*[0-9]+/[0-9]+"),
        Rule::new("civil_first_appeal", r"(?i)C\.Ist\.Appl\s*[0-9]+/[0-9]+"),
        Rule::new("civil_revision", r"(?i)C\.R\.\s*[0-9]+/[0-9]+"),
        Rule::new("fir", r"(?i)FIR\s*[0-9]+/[0-9]+"),
    ]
});

/// Court number captured from the first "Court No : N" in `text`.
pub fn court_number(text: &str) -> Option<&str> {
    COURT_NO_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
