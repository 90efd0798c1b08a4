//! Password evaluator - runs every check once and collects the results.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time::{CrackTime, estimate_crack_time};
use crate::criteria::{CRITERIA, CRITERIA_COUNT, Criterion, satisfied_mask};
use crate::denylist::CommonPasswords;
use crate::score::StrengthScore;

/// Debounce applied before an async evaluation runs.
#[cfg(feature = "async")]
pub const EVALUATION_DELAY: std::time::Duration = std::time::Duration::from_millis(300);

/// Snapshot of every check for one password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub score: StrengthScore,
    pub mask: [bool; CRITERIA_COUNT],
    pub crack_time: CrackTime,
    pub is_common: bool,
    pub is_empty: bool,
}

impl PasswordEvaluation {
    /// Criteria paired with whether the password meets them, in display order.
    pub fn criteria(&self) -> impl Iterator<Item = (&'static Criterion, bool)> + '_ {
        CRITERIA.iter().zip(self.mask.iter().copied())
    }

    /// Advisory line about the denylist check. Nothing is reported for
    /// empty input.
    pub fn common_advisory(&self) -> Option<&'static str> {
        if self.is_empty {
            None
        } else if self.is_common {
            Some("This is a commonly used password!")
        } else {
            Some("Password is not in common password list")
        }
    }
}

/// Evaluates a password against the criteria, the crack time model and
/// the given denylist.
pub fn evaluate_password(
    password: &SecretString,
    denylist: &CommonPasswords,
) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    let mask = satisfied_mask(password);

    PasswordEvaluation {
        score: StrengthScore::from_mask(&mask),
        mask,
        crack_time: estimate_crack_time(pwd.chars().count()),
        is_common: denylist.is_common(pwd),
        is_empty: pwd.is_empty(),
    }
}

/// Async version that waits out the debounce and sends the evaluation
/// via channel, unless cancelled in the meantime.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    denylist: &CommonPasswords,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DELAY).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before it started");
        return;
    }

    let evaluation = evaluate_password(password, denylist);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = secret("TestPass123!");
        evaluate_password_tx(&pwd, CommonPasswords::builtin(), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.value(), 5);
        assert!(!evaluation.is_common);
    }

    #[tokio::test]
    async fn test_evaluate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = secret("TestPass123!");
        evaluate_password_tx(&pwd, CommonPasswords::builtin(), token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();

        let handle = tokio::spawn(async move {
            let pwd = secret("password");
            evaluate_password_tx(&pwd, CommonPasswords::builtin(), token, tx).await;
        });

        tokio::time::sleep(EVALUATION_DELAY / 2).await;
        canceller.cancel();
        handle.await.expect("Task should not panic");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_password_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Send failure is swallowed
        let pwd = secret("TestPass123!");
        evaluate_password_tx(&pwd, CommonPasswords::builtin(), CancellationToken::new(), tx).await;
    }
}
