//! Word Scramble
//!
//! A word-game engine: given a root word, players submit derived words that
//! are validated against an ordered chain of rules (length, originality,
//! constructibility, dictionary) and scored.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::engine::{GameConfig, WordGame};
//!
//! let dictionary = WordSet::new(["silk", "worm"]);
//! let candidates = vec!["silkworm".to_string()];
//!
//! let mut game = WordGame::start(GameConfig::default(), dictionary, &candidates, Some(1)).unwrap();
//! let outcome = game.submit("silk");
//! assert!(outcome.is_accepted());
//! assert_eq!(game.score(), 4);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Dictionary capability
pub mod dictionary;

// Root-word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
