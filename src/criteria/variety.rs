//! Character variety criteria - uppercase, lowercase and digit checks.
//!
//! Only ASCII ranges count: `Ä` is not an uppercase letter here, `٣` is not a digit.

pub fn uppercase_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn digit_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
