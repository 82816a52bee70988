//! Word game session
//!
//! A `WordGame` owns one round at a time: the root word, the accepted words
//! (most recent first) and the score. Submissions run through a fixed chain
//! of rules and short-circuit at the first failure, so each rejection carries
//! exactly one reason.

use crate::core::letters::is_constructible;
use crate::core::{Outcome, Rejection, normalize};
use crate::dictionary::Dictionary;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// How the score evolves across accepted words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Score accumulates each accepted word's points across the round
    #[default]
    Cumulative,
    /// Score shows only the most recent word's points
    LastWord,
}

impl ScoringMode {
    /// Create a scoring mode from a name string
    ///
    /// Supported names: "cumulative", "last-word", "last".
    /// Defaults to cumulative if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "last-word" | "last" => Self::LastWord,
            _ => Self::Cumulative,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Minimum accepted word length (default 3)
    pub min_word_length: usize,
    /// Scoring behavior across accepted words
    pub scoring: ScoringMode,
    /// Language tag passed through to the dictionary capability
    pub locale: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            scoring: ScoringMode::Cumulative,
            locale: "en".to_string(),
        }
    }
}

/// Error type for round setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No candidate root words were supplied
    NoRootWords,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRootWords => write!(f, "No candidate root words supplied"),
        }
    }
}

impl std::error::Error for GameError {}

/// Read-only snapshot of the current round
#[derive(Debug, Clone, Copy)]
pub struct GameState<'a> {
    /// The root word for this round
    pub root_word: &'a str,
    /// Accepted words, most recent first
    pub used_words: &'a [String],
    /// Current score
    pub score: usize,
}

/// A single-round word game
///
/// The engine is synchronous and single-threaded; `&mut self` on mutating
/// operations makes external serialization a compile-time fact.
pub struct WordGame<D: Dictionary> {
    config: GameConfig,
    dictionary: D,
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl<D: Dictionary> WordGame<D> {
    /// Start the first round, selecting a root word from `candidates`
    ///
    /// Selection is uniform at random, or deterministic when `seed` is given
    /// (reproducible rounds for tests and replays).
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if `candidates` is empty. The engine
    /// never substitutes a fallback on its own; see
    /// [`crate::wordlists::FALLBACK_ROOT`] for the explicit last-resort policy.
    pub fn start(
        config: GameConfig,
        dictionary: D,
        candidates: &[String],
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let root_word = pick_root(candidates, seed)?;
        Ok(Self {
            config,
            dictionary,
            root_word,
            used_words: Vec::new(),
            score: 0,
        })
    }

    /// Start a fresh round, discarding the previous round's words and score
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if `candidates` is empty; the
    /// previous round's state is left untouched in that case.
    pub fn restart(&mut self, candidates: &[String], seed: Option<u64>) -> Result<(), GameError> {
        // Select before mutating so a failure leaves the round intact
        let root_word = pick_root(candidates, seed)?;
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
        Ok(())
    }

    /// Submit a candidate word
    ///
    /// The raw input is normalized (lowercased, trimmed), then checked against
    /// the rules in order: minimum length, not the root word, not already
    /// used, constructible from the root's letters, known to the dictionary.
    /// The first failing rule produces the rejection; on success the word is
    /// recorded most-recent-first and the score updated.
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let word = normalize(raw);

        // Empty input falls out here too: no special case needed
        if word.chars().count() < self.config.min_word_length {
            return Outcome::Rejected(Rejection::TooShort {
                min: self.config.min_word_length,
            });
        }

        if word == self.root_word {
            return Outcome::Rejected(Rejection::MatchesRoot);
        }

        if self.used_words.iter().any(|used| *used == word) {
            return Outcome::Rejected(Rejection::AlreadyUsed);
        }

        if !is_constructible(&word, &self.root_word) {
            return Outcome::Rejected(Rejection::NotConstructible {
                root: self.root_word.clone(),
            });
        }

        if !self.dictionary.is_known_word(&word, &self.config.locale) {
            return Outcome::Rejected(Rejection::NotARealWord);
        }

        let gained = word.chars().count();
        self.used_words.insert(0, word.clone());
        match self.config.scoring {
            ScoringMode::Cumulative => self.score += gained,
            ScoringMode::LastWord => self.score = gained,
        }

        Outcome::Accepted { word, gained }
    }

    /// The root word for the current round
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Current score
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Read-only snapshot of the round
    #[must_use]
    pub fn snapshot(&self) -> GameState<'_> {
        GameState {
            root_word: &self.root_word,
            used_words: &self.used_words,
            score: self.score,
        }
    }
}

/// Pick one candidate uniformly at random, normalizing it for play
fn pick_root(candidates: &[String], seed: Option<u64>) -> Result<String, GameError> {
    let picked = match seed {
        Some(seed) => candidates.choose(&mut StdRng::seed_from_u64(seed)),
        None => candidates.choose(&mut rand::rng()),
    };

    picked.map(|root| normalize(root)).ok_or(GameError::NoRootWords)
}
