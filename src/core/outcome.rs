//! Submission outcomes
//!
//! A submission either succeeds or is rejected by exactly one rule. Rejections
//! are values carrying a display title and message, never errors: invalid
//! input is an expected part of play.

use std::fmt;

/// Result of submitting a word to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The word passed every rule and was added to the used list
    Accepted {
        /// The normalized word that was recorded
        word: String,
        /// Points awarded for this word
        gained: usize,
    },
    /// The word failed a rule; state is unchanged
    Rejected(Rejection),
}

impl Outcome {
    /// True if the submission was accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// The first rule a rejected submission failed
///
/// Rules are checked in a fixed order, so each submission surfaces at most
/// one rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Shorter than the configured minimum (also covers empty input)
    TooShort {
        /// The configured minimum word length
        min: usize,
    },
    /// The submission is the root word itself
    MatchesRoot,
    /// The word was already accepted this round
    AlreadyUsed,
    /// The word cannot be spelled from the root word's letters
    NotConstructible {
        /// The root word the letters were checked against
        root: String,
    },
    /// The dictionary does not recognize the word
    NotARealWord,
}

impl Rejection {
    /// Short display title for the rejection
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "Word too short",
            Self::MatchesRoot => "Word is the root",
            Self::AlreadyUsed => "Word used already",
            Self::NotConstructible { .. } => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Longer display message for the rejection
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::TooShort { min } => format!("Words must be at least {min} letters long"),
            Self::MatchesRoot => "That's the word you started with!".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotConstructible { root } => {
                format!("You can't spell that word from '{root}'!")
            }
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_outcome_is_accepted() {
        let outcome = Outcome::Accepted {
            word: "silk".to_string(),
            gained: 4,
        };
        assert!(outcome.is_accepted());
    }

    #[test]
    fn rejected_outcome_is_not_accepted() {
        let outcome = Outcome::Rejected(Rejection::AlreadyUsed);
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn rejection_titles_are_distinct() {
        let rejections = [
            Rejection::TooShort { min: 3 },
            Rejection::MatchesRoot,
            Rejection::AlreadyUsed,
            Rejection::NotConstructible {
                root: "silkworm".to_string(),
            },
            Rejection::NotARealWord,
        ];

        let mut titles: Vec<&str> = rejections.iter().map(Rejection::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), rejections.len());
    }

    #[test]
    fn messages_interpolate_context() {
        let too_short = Rejection::TooShort { min: 3 };
        assert!(too_short.message().contains('3'));

        let not_possible = Rejection::NotConstructible {
            root: "silkworm".to_string(),
        };
        assert!(not_possible.message().contains("silkworm"));
    }

    #[test]
    fn display_joins_title_and_message() {
        let rejection = Rejection::AlreadyUsed;
        assert_eq!(
            format!("{rejection}"),
            "Word used already: Be more original"
        );
    }
}
