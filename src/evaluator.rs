//! Criteria evaluator - aggregate evaluation and validation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{
    digits_met, length_within_bounds, lowercase_met, special_character_met, uppercase_met,
};
use crate::policy::{Policy, get_policy};
use crate::types::CriteriaSnapshot;

/// How long a keystroke must stand before the async evaluator fires.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates all five criteria and returns a fresh snapshot.
///
/// Length bounds come from the active policy (defaults 8-32). The result
/// depends only on the input text and that policy; calling twice on the
/// same text yields identical snapshots.
pub fn evaluate_password_criteria(password: &SecretString) -> CriteriaSnapshot {
    evaluate_with_policy(password, &get_policy())
}

/// Evaluates all five criteria against an explicit policy.
pub fn evaluate_with_policy(password: &SecretString, policy: &Policy) -> CriteriaSnapshot {
    CriteriaSnapshot {
        length_and_no_space: length_within_bounds(password, policy.min_length, policy.max_length),
        uppercase: uppercase_met(password),
        lowercase: lowercase_met(password),
        digit: digits_met(password),
        special_character: special_character_met(password),
    }
}

/// Returns true iff the password is acceptable for submission.
///
/// The length/no-space criterion is mandatory; of the four character
/// classes, at least `min_classes` (default 3) must be present.
pub fn validate_password(password: &SecretString) -> bool {
    validate_with_policy(password, &get_policy())
}

/// Validation against an explicit policy.
pub fn validate_with_policy(password: &SecretString, policy: &Policy) -> bool {
    let snapshot = evaluate_with_policy(password, policy);
    snapshot.length_and_no_space && snapshot.met_class_count() >= policy.min_classes
}

/// Debounced evaluation that sends the snapshot via channel.
///
/// Intended for per-keystroke hosts: each keystroke spawns this with a
/// fresh token and cancels the previous one. A cancelled call returns
/// without sending, so the channel only ever carries the snapshot of the
/// text that stood still long enough.
#[cfg(feature = "async")]
pub async fn evaluate_password_criteria_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<CriteriaSnapshot>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let snapshot = evaluate_password_criteria(password);

    if let Err(_e) = tx.send(snapshot).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send criteria snapshot: {}", _e);
    }
}
