//! Terminal UI scenes: setup screen, game screen, and the end-of-session
//! summary dialog overlay.

pub mod game_scene;
pub mod setup_scene;
pub mod summary_dialog;
