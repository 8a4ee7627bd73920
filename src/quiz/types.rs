//! Quiz session data structures.
//!
//! A session owns one `PlayedRegion` per catalogue entry for its whole
//! lifetime; questions and answers mutate those entries in place through
//! the session, never through shared references.

use serde::{Deserialize, Serialize};

use crate::catalog::{Region, DEPARTEMENTS};

/// Per-session mutable record for one catalogue entry.
///
/// Serialized (camelCase) as the export payload shape; unanswered
/// optional fields are omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedRegion {
    pub code: String,
    pub name: String,
    /// Has this region been selected as a question this session.
    pub picked: bool,
    /// Was the most recent answer for this region correct.
    pub founded: bool,
    /// The player's submitted text, once answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Milliseconds between question presentation and answer submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_time: Option<i64>,
    /// Epoch milliseconds when the region was presented as a question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_question_time: Option<i64>,
}

impl PlayedRegion {
    pub fn from_region(region: &Region) -> Self {
        Self {
            code: region.code.to_string(),
            name: region.name.to_string(),
            picked: false,
            founded: false,
            answer: None,
            answer_time: None,
            start_question_time: None,
        }
    }

    /// A region counts as answered once its answer time is recorded.
    pub fn is_answered(&self) -> bool {
        self.answer_time.is_some()
    }
}

/// Builds a fresh playable copy of the catalogue, all regions unpicked.
pub fn fresh_regions() -> Vec<PlayedRegion> {
    DEPARTEMENTS.iter().map(PlayedRegion::from_region).collect()
}

/// Where the session is in its question/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the player to choose how many regions to guess.
    AwaitingGuessCount,
    /// A question is open; waiting for the player's answer.
    InQuestion,
    /// No more questions; summary available until a new session starts.
    SessionEnded,
}

/// One complete play-through, owned exclusively by the state machine.
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// Requested number of questions for this session.
    pub target_count: usize,
    /// Full ordered catalogue with per-region mutable fields.
    pub regions: Vec<PlayedRegion>,
    /// Index of the in-flight question, if any.
    pub current: Option<usize>,
    /// Index of the most recently completed question, for feedback.
    pub previous: Option<usize>,
    pub phase: SessionPhase,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            target_count: 0,
            regions: fresh_regions(),
            current: None,
            previous: None,
            phase: SessionPhase::AwaitingGuessCount,
        }
    }

    pub fn catalog_size(&self) -> usize {
        self.regions.len()
    }

    pub fn current_region(&self) -> Option<&PlayedRegion> {
        self.current.map(|i| &self.regions[i])
    }

    pub fn previous_region(&self) -> Option<&PlayedRegion> {
        self.previous.map(|i| &self.regions[i])
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected transition out of `AwaitingGuessCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The guess count must satisfy `1 <= n <= catalogue size`.
    InvalidTargetCount { given: usize, max: usize },
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::InvalidTargetCount { given, max } => {
                write!(f, "guess count must be between 1 and {}, got {}", max, given)
            }
        }
    }
}

impl std::error::Error for StartError {}

/// Outcome of an answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank answer, or no question open: nothing changed.
    Ignored,
    /// Answer recorded; a new question is open.
    Answered { correct: bool },
    /// Answer recorded; that was the last question of the session.
    Ended { correct: bool },
}

/// Ordering of the end-of-session detail table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrder {
    /// By question presentation time, oldest first.
    ChronologicalAsc,
    /// By question presentation time, newest first.
    MostRecentFirst,
}
