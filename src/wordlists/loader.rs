//! Word list loading utilities
//!
//! Provides functions to load root-word candidates from files or convert the
//! embedded constants.

use crate::core::letters::is_letters_only;
use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load root-word candidates from a file
///
/// Lines are normalized (lowercased, trimmed); empty lines and lines with
/// non-letter characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let candidates = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} candidates", candidates.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let candidates = content
        .lines()
        .filter_map(|line| {
            let word = normalize(line);
            if is_letters_only(&word) {
                Some(word)
            } else {
                None
            }
        })
        .collect();

    Ok(candidates)
}

/// Convert an embedded string slice to owned candidates
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::candidates_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let candidates = candidates_from_slice(START_WORDS);
/// assert_eq!(candidates.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn candidates_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&s| normalize(s))
        .filter(|word| is_letters_only(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_from_slice_normalizes() {
        let input = &["Silkworm", "  listen ", "CLUELESS"];
        let candidates = candidates_from_slice(input);

        assert_eq!(candidates, ["silkworm", "listen", "clueless"]);
    }

    #[test]
    fn candidates_from_slice_skips_invalid() {
        let input = &["silkworm", "", "two words", "s1lk", "listen"];
        let candidates = candidates_from_slice(input);

        assert_eq!(candidates, ["silkworm", "listen"]);
    }

    #[test]
    fn candidates_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(candidates_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let candidates = candidates_from_slice(START_WORDS);
        assert_eq!(candidates.len(), START_WORDS.len());
    }
}
