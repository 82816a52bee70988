//! Game engine
//!
//! Session state and the ordered validation chain for word submissions.

mod game;

pub use game::{GameConfig, GameError, GameState, ScoringMode, WordGame};
