//! Dictionary capability
//!
//! Spell-checking is an external collaborator: the engine only needs a yes/no
//! answer for "is this a real word in this locale". The trait keeps the game
//! deterministic and testable with a fake dictionary.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A source of truth for whether a word is real
///
/// Implementations must be deterministic for a given `(word, locale)` pair
/// within a session.
pub trait Dictionary {
    /// Check whether `word` is a known word in `locale`
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

/// Hash-set backed dictionary loaded from a word list
///
/// Lookup is case-insensitive; the locale tag is ignored since a word list
/// file is already locale-specific.
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a dictionary from an iterator of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a dictionary from a newline-delimited word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(content.lines()))
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSet {
    fn is_known_word(&self, word: &str, _locale: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Permissive dictionary that recognizes every non-empty word
///
/// Useful for demos and tests where no word list is available.
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_known_word(&self, word: &str, _locale: &str) -> bool {
        !word.is_empty()
    }
}

/// Enum wrapper for runtime dictionary selection
///
/// Allows the CLI to pick a dictionary at startup while the engine stays
/// statically dispatched.
pub enum DictionaryKind {
    /// Word list loaded from a file
    WordList(WordSet),
    /// Accept any non-empty word
    Permissive(AcceptAll),
}

impl Dictionary for DictionaryKind {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        match self {
            Self::WordList(d) => d.is_known_word(word, locale),
            Self::Permissive(d) => d.is_known_word(word, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_set_lookup_is_case_insensitive() {
        let dict = WordSet::new(["Silk", "WORM"]);
        assert!(dict.is_known_word("silk", "en"));
        assert!(dict.is_known_word("SILK", "en"));
        assert!(dict.is_known_word("worm", "en"));
        assert!(!dict.is_known_word("moth", "en"));
    }

    #[test]
    fn word_set_trims_and_drops_blank_entries() {
        let dict = WordSet::new(["  silk  ", "", "   "]);
        assert_eq!(dict.len(), 1);
        assert!(dict.is_known_word("silk", "en"));
        assert!(!dict.is_known_word("", "en"));
    }

    #[test]
    fn word_set_empty() {
        let dict = WordSet::new(std::iter::empty::<&str>());
        assert!(dict.is_empty());
    }

    #[test]
    fn accept_all_rejects_only_empty() {
        assert!(AcceptAll.is_known_word("anything", "en"));
        assert!(AcceptAll.is_known_word("zzzz", "fr"));
        assert!(!AcceptAll.is_known_word("", "en"));
    }

    #[test]
    fn dictionary_kind_dispatches() {
        let list = DictionaryKind::WordList(WordSet::new(["silk"]));
        assert!(list.is_known_word("silk", "en"));
        assert!(!list.is_known_word("worm", "en"));

        let permissive = DictionaryKind::Permissive(AcceptAll);
        assert!(permissive.is_known_word("worm", "en"));
    }
}
