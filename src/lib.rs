//! depquiz - Terminal quiz game about French départements.
//!
//! The player chooses how many départements to guess, is shown their
//! codes one at a time, and types the names. This module exposes the
//! game logic for testing and for the binary.

pub mod build_info;
pub mod catalog;
pub mod constants;
pub mod export;
pub mod quiz;
pub mod ui;

pub use catalog::{Region, DEPARTEMENTS};
pub use quiz::types::{QuizSession, SessionPhase};
