//! Derived counters over the session's region list.
//!
//! All counters are stateless O(n) scans recomputed on demand; the
//! catalogue is small enough that caching would only add invariants to
//! break.

use super::types::PlayedRegion;

/// Number of regions selected as a question so far.
pub fn count_picked(regions: &[PlayedRegion]) -> usize {
    regions.iter().filter(|r| r.picked).count()
}

/// Number of regions with a recorded answer time.
pub fn count_answered(regions: &[PlayedRegion]) -> usize {
    regions.iter().filter(|r| r.is_answered()).count()
}

/// Number of regions answered correctly.
pub fn count_founded(regions: &[PlayedRegion]) -> usize {
    regions.iter().filter(|r| r.founded).count()
}

/// Sum of answer times over all answered regions, in milliseconds.
pub fn total_elapsed_time(regions: &[PlayedRegion]) -> i64 {
    regions.iter().filter_map(|r| r.answer_time).sum()
}
