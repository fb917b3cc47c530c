//! Password criteria
//!
//! Each criterion is an independent boolean check over the password text.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, length_criterion};
pub use special::{SPECIAL_CHARACTERS, special_criterion};
pub use variety::{digit_criterion, lowercase_criterion, uppercase_criterion};

/// Signature shared by every criterion check.
type CriterionFn = fn(&str) -> bool;

/// One independently evaluated password-quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    fn check(&self) -> CriterionFn {
        match self {
            Criterion::Length => length_criterion,
            Criterion::Uppercase => uppercase_criterion,
            Criterion::Lowercase => lowercase_criterion,
            Criterion::Digit => digit_criterion,
            Criterion::Special => special_criterion,
        }
    }

    pub fn is_met(&self, password: &str) -> bool {
        (self.check())(password)
    }

    /// Feedback shown when the criterion is not met.
    pub fn reason(&self) -> String {
        match self {
            Criterion::Length => format!("Password must be at least {} characters", MIN_LENGTH),
            Criterion::Uppercase => "Missing: uppercase letter (A-Z)".to_string(),
            Criterion::Lowercase => "Missing: lowercase letter (a-z)".to_string(),
            Criterion::Digit => "Missing: number (0-9)".to_string(),
            Criterion::Special => "Missing: special character".to_string(),
        }
    }
}
