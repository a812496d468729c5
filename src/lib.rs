//! Password criteria evaluation library
//!
//! This library evaluates a candidate password against five independent
//! criteria and reconciles per-criterion indicator display state for a
//! host UI. The evaluator itself is pure; the only retained state is the
//! display tracker the host owns.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced channel evaluator with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_PATH`: Custom path to a policy file overriding the
//!   default thresholds (default: `./assets/policy.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_criteria::{evaluate_password_criteria, validate_password};
//! use pwd_criteria::{DisplayMode, IndicatorState, Criterion, PasswordStatus};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Passw0rd!".to_string().into());
//!
//! // One-shot evaluation and submit gating
//! let snapshot = evaluate_password_criteria(&password);
//! assert!(snapshot.uppercase);
//! assert!(validate_password(&password));
//!
//! // Per-keystroke indicator tracking
//! let mut status = PasswordStatus::new();
//! status.update_display(&password);
//! assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Met);
//! ```

// Internal modules
mod criteria;
mod display;
mod evaluator;
mod policy;
mod types;

// Public API
pub use criteria::{
    MAX_LENGTH, MIN_LENGTH, digits_met, length_and_no_space_met, lowercase_met,
    special_character_met, uppercase_met,
};
pub use display::{DisplayMode, DisplayState, IndicatorState, PasswordStatus, project_display};
pub use evaluator::{
    evaluate_password_criteria, evaluate_with_policy, validate_password, validate_with_policy,
};
pub use policy::{Policy, PolicyError, get_policy, init_policy, init_policy_from_path};
pub use types::{CriteriaSnapshot, Criterion};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_criteria_tx;
