//! Length criterion - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Returns `true` when the password has at least [`MIN_LENGTH`] characters.
///
/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (e.g. most emoji) counts as two.
pub fn length_criterion(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_criterion_too_short() {
        assert!(!length_criterion("Short1!"));
    }

    #[test]
    fn test_length_criterion_exactly_minimum() {
        assert!(length_criterion("12345678"));
    }

    #[test]
    fn test_length_criterion_valid() {
        assert!(length_criterion("LongEnough123!"));
    }

    #[test]
    fn test_length_criterion_counts_utf16_units_not_bytes() {
        // 7 chars, 14 bytes
        assert!(!length_criterion("ééééééé"));
        assert!(length_criterion("éééééééé"));
    }

    #[test]
    fn test_length_criterion_astral_chars_count_twice() {
        // 4 chars, 8 UTF-16 units
        assert!(length_criterion("🔒🔒🔒🔒"));
        assert!(!length_criterion("🔒🔒🔒"));
        assert!(!length_criterion("🔒🔒🔒a"));
        assert!(length_criterion("🔒🔒🔒ab"));
    }
}
