//! Policy management module
//!
//! Handles loading and querying the active criteria policy.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static ACTIVE_POLICY: RwLock<Option<Policy>> = RwLock::new(None);

/// Thresholds applied by the aggregate evaluation operations.
///
/// The defaults (8-32 characters, 3 of 4 character classes) are the
/// crate's documented contract; a host may override them via a policy
/// file at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Minimum password length in characters.
    pub min_length: usize,
    /// Maximum password length in characters.
    pub max_length: usize,
    /// How many of the four character classes must be present.
    pub min_classes: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            min_length: 8,
            max_length: 32,
            min_classes: 3,
        }
    }
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Policy file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read policy file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Policy file is empty")]
    EmptyFile,
    #[error("Invalid policy entry at line {line}: {entry}")]
    Parse { line: usize, entry: String },
    #[error("Invalid policy value: {0}")]
    InvalidValue(String),
}

/// Returns the policy file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_PATH`
/// 2. Default path `./assets/policy.txt`
pub fn get_policy_path() -> PathBuf {
    std::env::var("PWD_POLICY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/policy.txt"))
}

/// Initializes the active policy from an external file.
///
/// # Environment Variable
///
/// Set `PWD_POLICY_PATH` to specify a custom policy file location.
/// If not set, defaults to `./assets/policy.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty or malformed
pub fn init_policy() -> Result<Policy, PolicyError> {
    let path = get_policy_path();
    init_policy_from_path(&path)
}

/// Initializes the active policy from a specific file path.
///
/// The file holds `key = value` lines for `min_length`, `max_length` and
/// `min_classes`; lines starting with `#` are ignored. Missing keys keep
/// their default value. Idempotent: once a policy is active, subsequent
/// calls return it without touching the filesystem.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty or malformed
/// - Resulting thresholds are inconsistent
pub fn init_policy_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Policy, PolicyError> {
    {
        let guard = ACTIVE_POLICY.read().unwrap();
        if let Some(policy) = *guard {
            return Ok(policy);
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy initialization FAILED: FileNotFound {:?}", path);
        return Err(PolicyError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy initialization FAILED: Empty file {:?}", path);
        return Err(PolicyError::EmptyFile);
    }

    let policy = parse_policy(&content)?;

    {
        let mut guard = ACTIVE_POLICY.write().unwrap();
        *guard = Some(policy);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Policy initialized: {:?} from {:?}", policy, path);

    Ok(policy)
}

/// Returns the active policy, or the defaults if none was initialized.
pub fn get_policy() -> Policy {
    let guard = ACTIVE_POLICY.read().unwrap();
    guard.unwrap_or_default()
}

fn parse_policy(content: &str) -> Result<Policy, PolicyError> {
    let mut policy = Policy::default();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_err = || PolicyError::Parse {
            line: idx + 1,
            entry: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(|| parse_err())?;
        let value: usize = value.trim().parse().map_err(|_| parse_err())?;

        match key.trim() {
            "min_length" => policy.min_length = value,
            "max_length" => policy.max_length = value,
            "min_classes" => policy.min_classes = value,
            _ => return Err(parse_err()),
        }
    }

    if policy.min_length == 0 {
        return Err(PolicyError::InvalidValue(
            "min_length must be at least 1".to_string(),
        ));
    }
    if policy.min_length > policy.max_length {
        return Err(PolicyError::InvalidValue(format!(
            "min_length {} exceeds max_length {}",
            policy.min_length, policy.max_length
        )));
    }
    if policy.min_classes > 4 {
        return Err(PolicyError::InvalidValue(
            "min_classes cannot exceed 4".to_string(),
        ));
    }

    Ok(policy)
}

/// Resets the active policy for testing purposes.
#[cfg(test)]
pub fn reset_policy_for_testing() {
    let mut guard = ACTIVE_POLICY.write().unwrap();
    *guard = None;
}
