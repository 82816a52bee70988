//! Root-word lists
//!
//! Provides the embedded candidate list compiled into the binary and a loader
//! for external word list files.

mod embedded;
pub mod loader;

pub use embedded::{START_WORDS, START_WORDS_COUNT};

/// Documented last-resort root word
///
/// The engine never applies this on its own: an empty candidate list is a
/// [`crate::engine::GameError::NoRootWords`]. An embedder that explicitly
/// prefers a degraded round over a hard stop may pass
/// `&[FALLBACK_ROOT.to_string()]` itself.
pub const FALLBACK_ROOT: &str = "silkworm";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letters::is_letters_only;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_usable_roots() {
        for &word in START_WORDS {
            assert!(
                is_letters_only(word),
                "Start word '{word}' contains non-letters"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' is not lowercase"
            );
        }
    }

    #[test]
    fn start_words_not_empty() {
        assert!(!START_WORDS.is_empty());
    }

    #[test]
    fn fallback_root_is_a_valid_root() {
        assert!(is_letters_only(FALLBACK_ROOT));
        assert!(FALLBACK_ROOT.chars().all(|c| c.is_ascii_lowercase()));
    }
}
