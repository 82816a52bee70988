//! Core domain types for the word-scramble game
//!
//! This module contains the fundamental domain logic with zero external collaborators.
//! Everything here is pure, testable, and has clear semantics.

pub mod letters;
mod outcome;

pub use outcome::{Outcome, Rejection};

/// Normalize a raw submission: trim surrounding whitespace and lowercase.
///
/// Every rule in the validation chain operates on the normalized form;
/// the raw string is never stored.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  SiLk \n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("Silk"), "silk");
        assert_eq!(normalize("  worm  "), "worm");
        assert_eq!(normalize("\tSILKWORM\n"), "silkworm");
    }

    #[test]
    fn normalize_whitespace_only_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n"), "");
    }

    #[test]
    fn normalize_keeps_interior_characters() {
        // Interior whitespace is not stripped; such input fails validation later
        assert_eq!(normalize("two words"), "two words");
    }
}
