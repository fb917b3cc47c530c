//! Strength labels, scores and evaluation results.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::criteria::Criterion;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStrengthLabelError {
    #[error("Unknown strength label: {0:?}")]
    Unknown(String),
}

/// Number of satisfied criteria, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    pub const MAX: Score = Score(Criterion::ALL.len() as u8);

    /// Builds a score from a count of satisfied criteria, saturating at [`Score::MAX`].
    pub fn new(count: usize) -> Self {
        Score(count.min(Self::MAX.0 as usize) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Final categorical output of classification.
///
/// Variants are declared in rank order, so `Weak < Medium < Strong < VeryStrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StrengthLabel {
    #[default]
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a score to its label: 0-1 weak, 2-3 medium, 4 strong, 5 very strong.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=1 => StrengthLabel::Weak,
            2..=3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very strong",
        }
    }

    /// Position in the `weak < medium < strong < very strong` ordering.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLabel {
    type Err = ParseStrengthLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthLabel::Weak),
            "medium" => Ok(StrengthLabel::Medium),
            "strong" => Ok(StrengthLabel::Strong),
            "very strong" => Ok(StrengthLabel::VeryStrong),
            other => Err(ParseStrengthLabelError::Unknown(other.to_string())),
        }
    }
}

/// Detailed result of a password evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: Score,
    /// Criteria the password satisfied, in [`Criterion::ALL`] order.
    pub satisfied: Vec<Criterion>,
    /// One feedback message per unmet criterion.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }

    pub fn is_satisfied(&self, criterion: Criterion) -> bool {
        self.satisfied.contains(&criterion)
    }
}
