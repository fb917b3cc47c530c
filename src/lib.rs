//! Password strength classification library
//!
//! Classifies a candidate password as `weak`, `medium`, `strong` or
//! `very strong` by counting how many of five criteria it meets:
//! at least 8 characters, an uppercase letter, a lowercase letter,
//! a digit, and a special character from `!@#$%^&*()_+-=[]{}|;:,.<>?`.
//!
//! | Criteria met | Label |
//! |---|---|
//! | 0-1 | weak |
//! | 2-3 | medium |
//! | 4 | strong |
//! | 5 | very strong |
//!
//! Values that are not strings, and the empty string, are always `weak`.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `json`: Accepts `serde_json::Value` as a candidate
//!
//! # Example
//!
//! ```rust
//! use pwd_classify::{classify, evaluate_password_strength, StrengthLabel};
//! use secrecy::SecretString;
//!
//! assert_eq!(classify("abcdefgh"), StrengthLabel::Medium);
//! assert_eq!(classify(&None::<String>), StrengthLabel::Weak);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//! ```

// Internal modules
mod candidate;
mod criteria;
mod evaluator;
mod strength;

// Public API
pub use candidate::Candidate;
pub use criteria::{Criterion, MIN_LENGTH, SPECIAL_CHARACTERS};
pub use evaluator::{classify, evaluate_password_strength};
pub use strength::{ParseStrengthLabelError, PasswordEvaluation, Score, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
