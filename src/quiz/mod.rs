//! The quiz core: data types, answer checking, selection, scoring, and
//! the session state machine.

pub mod answer;
pub mod logic;
pub mod scoring;
pub mod summary;
pub mod types;

pub use answer::{check_answer, normalize};
pub use logic::{pick, pick_random, start, submit_answer};
pub use scoring::{count_answered, count_founded, count_picked, total_elapsed_time};
pub use summary::{export_payload, SessionSummary, SummaryRow};
pub use types::{
    PlayedRegion, QuizSession, SessionPhase, StartError, SubmitOutcome, SummaryOrder,
};
