use super::types::{CaseRecord, CourtSummary};

/// Group records by court number, keeping courts and stages in the order
/// they first appear.
pub fn summarize_by_court(records: &[CaseRecord]) -> Vec<CourtSummary> {
    let mut summaries: Vec<CourtSummary> = Vec::new();

    for record in records {
        let existing = summaries
            .iter()
            .position(|s| s.court_no == record.court_no);
        let position = match existing {
            Some(position) => position,
            None => {
                summaries.push(CourtSummary {
                    court_no: record.court_no.clone(),
                    count: 0,
                    stages: Vec::new(),
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[position];
        summary.count += 1;
        if !summary.stages.contains(&record.stage) {
            summary.stages.push(record.stage.clone());
        }
    }

    summaries
}
