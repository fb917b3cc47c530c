//! Password strength classifier - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::candidate::Candidate;
use crate::criteria::Criterion;
use crate::strength::{PasswordEvaluation, Score, StrengthLabel};

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Classifies a candidate password into a strength label.
///
/// Non-string candidates and the empty string are `Weak` without any
/// criterion being checked. Never fails.
///
/// ```
/// use pwd_classify::{classify, StrengthLabel};
///
/// assert_eq!(classify("Abcdefgh1!"), StrengthLabel::VeryStrong);
/// assert_eq!(classify(&12345678), StrengthLabel::Weak);
/// ```
pub fn classify<C: Candidate + ?Sized>(input: &C) -> StrengthLabel {
    match input.as_password() {
        Some(password) if !password.is_empty() => {
            let met = Criterion::ALL.iter().filter(|c| c.is_met(password)).count();
            StrengthLabel::from_score(Score::new(met))
        }
        _ => StrengthLabel::Weak,
    }
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Returns
/// A `PasswordEvaluation` with the score, the satisfied criteria and one
/// reason per unmet criterion. `strength()` on it agrees with [`classify`].
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return PasswordEvaluation {
            score: Score::default(),
            satisfied: Vec::new(),
            reasons: vec!["Password is empty".to_string()],
        };
    }
    evaluate(pwd)
}

fn evaluate(password: &str) -> PasswordEvaluation {
    let mut satisfied = Vec::with_capacity(Criterion::ALL.len());
    let mut reasons = Vec::new();

    for criterion in Criterion::ALL {
        if criterion.is_met(password) {
            satisfied.push(criterion);
        } else {
            reasons.push(criterion.reason());
        }
    }

    let evaluation = PasswordEvaluation {
        score: Score::new(satisfied.len()),
        satisfied,
        reasons,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength(),
        "password evaluated"
    );

    evaluation
}

/// Debounced version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled meanwhile (the user
/// kept typing) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("Abcdefgh1!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), StrengthLabel::VeryStrong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&secret("Abcdefgh1!"), token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_waits_for_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = secret("abcdefgh");

        let start = tokio::time::Instant::now();
        evaluate_password_strength_tx(&pwd, token, tx).await;

        assert!(start.elapsed() >= DEBOUNCE);
        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), StrengthLabel::Medium);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_closed_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        evaluate_password_strength_tx(&secret("Abcdefgh1!"), CancellationToken::new(), tx).await;
    }
}
