//! End-of-session summary: aggregate tally, ordered detail rows, and the
//! export payload.

use super::scoring::{count_founded, count_picked, total_elapsed_time};
use super::types::{PlayedRegion, SummaryOrder};

/// One line of the end-of-session detail table.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub code: String,
    pub name: String,
    pub founded: bool,
    pub answer: Option<String>,
    /// Per-question answer time in milliseconds, if the question was answered.
    pub answer_time: Option<i64>,
}

/// Aggregates computed once from the final region list.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Regions answered correctly.
    pub founded: usize,
    /// Regions presented as questions.
    pub picked: usize,
    /// Total answer time in milliseconds.
    pub total_time_ms: i64,
    /// Detail rows for every picked region, in the requested order.
    pub rows: Vec<SummaryRow>,
}

impl SessionSummary {
    /// Builds the summary over the final region list.
    ///
    /// Rows cover every picked region, ordered by question presentation
    /// time according to `order`.
    pub fn build(regions: &[PlayedRegion], order: SummaryOrder) -> Self {
        let mut picked_regions: Vec<&PlayedRegion> =
            regions.iter().filter(|r| r.picked).collect();
        picked_regions.sort_by_key(|r| r.start_question_time);
        if order == SummaryOrder::MostRecentFirst {
            picked_regions.reverse();
        }

        let rows = picked_regions
            .iter()
            .map(|r| SummaryRow {
                code: r.code.clone(),
                name: r.name.clone(),
                founded: r.founded,
                answer: r.answer.clone(),
                answer_time: r.answer_time,
            })
            .collect();

        Self {
            founded: count_founded(regions),
            picked: count_picked(regions),
            total_time_ms: total_elapsed_time(regions),
            rows,
        }
    }

    /// Total time split into whole minutes and leftover seconds.
    pub fn total_time_min_sec(&self) -> (i64, i64) {
        let total_secs = self.total_time_ms / 1000;
        (total_secs / 60, total_secs % 60)
    }
}

/// The export payload: exactly the picked regions, catalogue order, with
/// all recorded fields. Serialized by the caller as a plain JSON array.
pub fn export_payload(regions: &[PlayedRegion]) -> Vec<PlayedRegion> {
    regions.iter().filter(|r| r.picked).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::types::fresh_regions;

    fn played_at(regions: &mut [PlayedRegion], idx: usize, start: i64, time: i64, founded: bool) {
        regions[idx].picked = true;
        regions[idx].founded = founded;
        regions[idx].answer = Some("something".to_string());
        regions[idx].start_question_time = Some(start);
        regions[idx].answer_time = Some(time);
    }

    #[test]
    fn test_summary_tally() {
        let mut regions = fresh_regions();
        played_at(&mut regions, 0, 100, 2000, true);
        played_at(&mut regions, 5, 200, 3000, false);
        played_at(&mut regions, 9, 300, 1000, true);

        let summary = SessionSummary::build(&regions, SummaryOrder::ChronologicalAsc);
        assert_eq!(summary.founded, 2);
        assert_eq!(summary.picked, 3);
        assert_eq!(summary.total_time_ms, 6000);
        assert_eq!(summary.rows.len(), 3);
    }

    #[test]
    fn test_minutes_seconds_split() {
        let mut regions = fresh_regions();
        played_at(&mut regions, 0, 0, 61_000, true);
        played_at(&mut regions, 1, 1, 64_500, false);

        let summary = SessionSummary::build(&regions, SummaryOrder::ChronologicalAsc);
        // 125.5s total -> 2 minutes 5 seconds
        assert_eq!(summary.total_time_min_sec(), (2, 5));
    }

    #[test]
    fn test_rows_ordered_chronologically() {
        let mut regions = fresh_regions();
        // Picked in catalogue order 2, 7, 4 but presented 4 -> 2 -> 7
        played_at(&mut regions, 2, 500, 10, true);
        played_at(&mut regions, 7, 900, 10, true);
        played_at(&mut regions, 4, 100, 10, true);

        let asc = SessionSummary::build(&regions, SummaryOrder::ChronologicalAsc);
        let asc_codes: Vec<&str> = asc.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(
            asc_codes,
            vec![
                regions[4].code.as_str(),
                regions[2].code.as_str(),
                regions[7].code.as_str()
            ]
        );

        let desc = SessionSummary::build(&regions, SummaryOrder::MostRecentFirst);
        let desc_codes: Vec<&str> = desc.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(
            desc_codes,
            vec![
                regions[7].code.as_str(),
                regions[2].code.as_str(),
                regions[4].code.as_str()
            ]
        );
    }

    #[test]
    fn test_rows_include_unanswered_picked_region() {
        let mut regions = fresh_regions();
        played_at(&mut regions, 0, 100, 2000, true);
        // Current question at session end that was never answered would
        // not happen in practice, but a picked region always gets a row.
        regions[1].picked = true;
        regions[1].start_question_time = Some(200);

        let summary = SessionSummary::build(&regions, SummaryOrder::ChronologicalAsc);
        assert_eq!(summary.rows.len(), 2);
        assert!(summary.rows[1].answer_time.is_none());
    }

    #[test]
    fn test_export_payload_is_exactly_the_picked_subset() {
        let mut regions = fresh_regions();
        played_at(&mut regions, 10, 100, 500, true);
        played_at(&mut regions, 20, 200, 700, false);

        let payload = export_payload(&regions);
        assert_eq!(payload.len(), 2);
        assert!(payload.iter().all(|r| r.picked));

        let json = serde_json::to_string(&payload).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_session_summary() {
        let regions = fresh_regions();
        let summary = SessionSummary::build(&regions, SummaryOrder::ChronologicalAsc);
        assert_eq!(summary.founded, 0);
        assert_eq!(summary.picked, 0);
        assert_eq!(summary.total_time_ms, 0);
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_time_min_sec(), (0, 0));
        assert!(export_payload(&regions).is_empty());
    }
}
