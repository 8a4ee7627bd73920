//! Selection engine and the quiz state machine.
//!
//! The state machine owns all mutable game state and advances it through
//! a two-phase cycle once started: present a question, record the answer,
//! repeat until the requested count (or the whole catalogue) is exhausted.
//! Timestamps are caller-supplied epoch milliseconds so tests can drive a
//! deterministic clock; selection is generic over `rand::Rng` for the
//! same reason.

use rand::Rng;

use super::answer::check_answer;
use super::scoring::count_picked;
use super::types::{PlayedRegion, QuizSession, SessionPhase, StartError, SubmitOutcome};

/// Marks the `random_index`-th currently unpicked region as picked and
/// returns its index into the full list.
///
/// `random_index` addresses the subset of unpicked regions, 0-based, in
/// catalogue order. An out-of-range index means the caller's unpicked
/// count disagrees with the list itself, which is a programming error:
/// this panics rather than recovering.
pub fn pick(regions: &mut [PlayedRegion], random_index: usize) -> usize {
    let idx = regions
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.picked)
        .map(|(i, _)| i)
        .nth(random_index)
        .unwrap_or_else(|| {
            panic!(
                "pick index {} out of range ({} unpicked regions)",
                random_index,
                regions.iter().filter(|r| !r.picked).count()
            )
        });
    regions[idx].picked = true;
    idx
}

/// Draws a uniformly random unpicked region, marks it picked, and returns
/// its index. Draw-and-mark is one operation so callers can never pair a
/// stale index with a recomputed subset.
///
/// Panics if every region is already picked; the advance logic checks the
/// picked count first.
pub fn pick_random<R: Rng>(regions: &mut [PlayedRegion], rng: &mut R) -> usize {
    let remaining = regions.len() - count_picked(regions);
    let random_index = rng.gen_range(0..remaining);
    pick(regions, random_index)
}

/// Starts a new session with `target_count` questions.
///
/// The machine enforces `1 <= target_count <= catalogue size` itself; a
/// rejected count leaves the session untouched and the caller re-prompts.
/// On success all regions are reset and the first question is presented.
pub fn start<R: Rng>(
    session: &mut QuizSession,
    target_count: usize,
    rng: &mut R,
    now_ms: i64,
) -> Result<(), StartError> {
    let max = session.catalog_size();
    if target_count == 0 || target_count > max {
        return Err(StartError::InvalidTargetCount {
            given: target_count,
            max,
        });
    }

    for region in &mut session.regions {
        region.picked = false;
        region.founded = false;
        region.answer = None;
        region.answer_time = None;
        region.start_question_time = None;
    }
    session.target_count = target_count;
    session.current = None;
    session.previous = None;
    advance(session, rng, now_ms);
    Ok(())
}

/// Records the player's answer to the current question and advances.
///
/// Blank answers are ignored (no state change); the UI re-prompts. The
/// same holds when no question is open.
pub fn submit_answer<R: Rng>(
    session: &mut QuizSession,
    answer: &str,
    rng: &mut R,
    now_ms: i64,
) -> SubmitOutcome {
    if answer.trim().is_empty() {
        return SubmitOutcome::Ignored;
    }
    let Some(idx) = session.current else {
        return SubmitOutcome::Ignored;
    };

    let region = &mut session.regions[idx];
    let correct = check_answer(answer, region);
    region.answer = Some(answer.to_string());
    region.founded = correct;
    // start_question_time is always set when a question is current
    region.answer_time = Some(now_ms - region.start_question_time.unwrap_or(now_ms));

    session.previous = Some(idx);
    advance(session, rng, now_ms);

    match session.phase {
        SessionPhase::SessionEnded => SubmitOutcome::Ended { correct },
        _ => SubmitOutcome::Answered { correct },
    }
}

/// Decision procedure run at session start and after every answer:
/// present another question while both the catalogue and the target count
/// allow it, otherwise end the session.
fn advance<R: Rng>(session: &mut QuizSession, rng: &mut R, now_ms: i64) {
    let picked = count_picked(&session.regions);
    if picked < session.catalog_size() && picked < session.target_count {
        let idx = pick_random(&mut session.regions, rng);
        session.regions[idx].start_question_time = Some(now_ms);
        session.current = Some(idx);
        session.phase = SessionPhase::InQuestion;
    } else {
        session.current = None;
        session.phase = SessionPhase::SessionEnded;
    }
}
