//! Letter-pool arithmetic
//!
//! A word is constructible from a root when its letters form a sub-multiset of
//! the root's letters: each letter may be used at most as many times as it
//! appears in the root.

use rustc_hash::FxHashMap;

/// Count each letter in a word
#[must_use]
pub fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Counting-map formulation of the multiset-subtraction test: for every
/// distinct letter of the candidate, its count must not exceed its count in
/// the root.
///
/// # Examples
/// ```
/// use word_scramble::core::letters::is_constructible;
///
/// assert!(is_constructible("silk", "silkworm"));
/// assert!(!is_constructible("tills", "listen")); // needs two l's, root has one
/// ```
#[must_use]
pub fn is_constructible(candidate: &str, root: &str) -> bool {
    let mut pool = letter_counts(root);

    for ch in candidate.chars() {
        match pool.get_mut(&ch) {
            Some(remaining) if *remaining > 0 => *remaining -= 1,
            _ => return false,
        }
    }

    true
}

/// Check whether a string is non-empty and made of letters only
///
/// Used to vet candidate root words coming from external word lists.
#[must_use]
pub fn is_letters_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_counts_tracks_duplicates() {
        let counts = letter_counts("letter");
        assert_eq!(counts.get(&'l'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'t'), Some(&2));
        assert_eq!(counts.get(&'r'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn letter_counts_empty_word() {
        assert!(letter_counts("").is_empty());
    }

    #[test]
    fn constructible_permutation_of_subset() {
        assert!(is_constructible("silk", "silkworm"));
        assert!(is_constructible("worm", "silkworm"));
        assert!(is_constructible("silkworm", "silkworm"));
    }

    #[test]
    fn constructible_respects_multiplicity() {
        // "tilsen" rearranges a subset of "listen"; "tills" needs an l twice
        assert!(is_constructible("tilsen", "listen"));
        assert!(!is_constructible("tills", "listen"));
    }

    #[test]
    fn not_constructible_with_foreign_letter() {
        assert!(!is_constructible("silky", "silkworm"));
        assert!(!is_constructible("car", "silkworm"));
    }

    #[test]
    fn empty_candidate_is_trivially_constructible() {
        // The empty multiset is a subset of everything; minimum-length
        // validation rejects it before this check ever runs
        assert!(is_constructible("", "silkworm"));
    }

    #[test]
    fn letters_only_rejects_punctuation_and_digits() {
        assert!(is_letters_only("silkworm"));
        assert!(!is_letters_only("silk worm"));
        assert!(!is_letters_only("s1lk"));
        assert!(!is_letters_only(""));
    }
}
