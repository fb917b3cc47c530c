//! Special character criterion.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The accepted special characters. Matched literally, one char each.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

static SPECIAL_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| SPECIAL_CHARACTERS.chars().collect());

fn is_special(c: char) -> bool {
    SPECIAL_SET.contains(&c)
}

/// Returns `true` when the password contains at least one of [`SPECIAL_CHARACTERS`].
pub fn special_criterion(password: &str) -> bool {
    password.chars().any(is_special)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_character_counts() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(special_criterion(&c.to_string()), "{:?} should count", c);
        }
    }

    #[test]
    fn test_set_size() {
        assert_eq!(SPECIAL_SET.len(), 26);
    }

    #[test]
    fn test_characters_outside_set_do_not_count() {
        for c in ['~', '"', '\'', '/', '\\', '`', ' ', '€', '§'] {
            assert!(!is_special(c), "{:?} should not count", c);
        }
        assert!(!special_criterion("NoSpecial123~"));
    }

    #[test]
    fn test_bracket_and_dot_are_literal() {
        assert!(special_criterion("a.b"));
        assert!(special_criterion("x[y"));
        assert!(special_criterion("x-y"));
        assert!(!special_criterion("xyz"));
    }
}
