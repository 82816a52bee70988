//! Formatting utilities for terminal output

/// Count the non-whitespace characters of a word
///
/// Used for the per-word length badge next to accepted words.
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().filter(|c| !c.is_whitespace()).count()
}

/// Format a letter count as a circled-number badge
///
/// Falls back to `(n)` outside the range of circled digits.
#[must_use]
pub fn length_badge(count: usize) -> String {
    // U+2460 CIRCLED DIGIT ONE through U+2473 CIRCLED NUMBER TWENTY
    if (1..=20).contains(&count) {
        let badge = char::from_u32(0x2460 + (count as u32 - 1));
        if let Some(ch) = badge {
            return ch.to_string();
        }
    }
    format!("({count})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_count_ignores_whitespace() {
        assert_eq!(letter_count("silk"), 4);
        assert_eq!(letter_count("silk worm"), 8);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn length_badge_uses_circled_digits() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn length_badge_falls_back_outside_range() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }
}
