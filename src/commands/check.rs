//! One-shot word checking
//!
//! Validates a batch of words against a fixed root word, applying the same
//! rule chain as interactive play. Useful for scripting and for puzzle
//! verification.

use crate::core::Outcome;
use crate::dictionary::Dictionary;
use crate::engine::{GameConfig, GameError, WordGame};
use crate::wordlists::loader::candidates_from_slice;

/// Result of checking a batch of words against a root
pub struct CheckReport {
    /// The normalized root word used for the round
    pub root: String,
    /// Each submitted word with its outcome, in submission order
    pub outcomes: Vec<(String, Outcome)>,
    /// Final score under the configured scoring mode
    pub score: usize,
}

/// Check each word in `words` against `root`
///
/// Words are validated in order against a single fresh round, so earlier
/// acceptances feed the originality rule for later words.
///
/// # Errors
///
/// Returns `GameError::NoRootWords` if `root` is empty or contains
/// non-letter characters.
pub fn run_check<D: Dictionary>(
    config: GameConfig,
    dictionary: D,
    root: &str,
    words: &[String],
) -> Result<CheckReport, GameError> {
    // A malformed root filters down to an empty candidate list
    let candidates = candidates_from_slice(&[root]);
    let mut game = WordGame::start(config, dictionary, &candidates, None)?;

    let outcomes = words
        .iter()
        .map(|raw| (raw.clone(), game.submit(raw)))
        .collect();

    Ok(CheckReport {
        root: game.root_word().to_string(),
        outcomes,
        score: game.score(),
    })
}
