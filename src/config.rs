//! Policy file loading
//!
//! Reads a policy in its text form from a file.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::{parse_policy, ParseError};
use crate::policy::Policy;

/// Environment variable naming the policy file.
pub const POLICY_PATH_ENV: &str = "PWD_POLICY_PATH";

const DEFAULT_POLICY_PATH: &str = "./assets/policy.conf";

#[derive(Error, Debug)]
pub enum PolicyLoadError {
    #[error("Policy file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read policy file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse policy file: {0}")]
    Parse(#[from] ParseError),
}

/// Returns the policy file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_PATH`
/// 2. Default path `./assets/policy.conf`
pub fn get_policy_path() -> PathBuf {
    std::env::var(POLICY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_POLICY_PATH))
}

/// Loads the policy from the path given by [`get_policy_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File content is not a valid policy
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_POLICY_PATH", "/etc/myapp/policy.conf"); }
/// let policy = pwd_quality::load_policy()?;
/// ```
pub fn load_policy() -> Result<Policy, PolicyLoadError> {
    let path = get_policy_path();
    load_policy_from_path(&path)
}

/// Loads the policy from a specific file path.
pub fn load_policy_from_path<P: AsRef<Path>>(path: P) -> Result<Policy, PolicyLoadError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy loading FAILED: FileNotFound {:?}", path);
        return Err(PolicyLoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let policy = parse_policy(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Policy loaded from {:?}: {}", path, policy);

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::MinLength;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", content).expect("Failed to write");
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_policy_path_default() {
        remove_env(POLICY_PATH_ENV);

        let path = get_policy_path();
        assert_eq!(path, PathBuf::from("./assets/policy.conf"));
    }

    #[test]
    #[serial]
    fn test_get_policy_path_from_env() {
        let custom_path = "/custom/path/policy.conf";
        set_env(POLICY_PATH_ENV, custom_path);

        let path = get_policy_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(POLICY_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_policy_file_not_found() {
        set_env(POLICY_PATH_ENV, "/nonexistent/path/policy.conf");

        let result = load_policy();
        match result {
            Err(PolicyLoadError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }

        remove_env(POLICY_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_policy_success() {
        let temp_file = setup_with_tempfile("min=disabled,20,12,9,8\nmax=256\nsimilar=permit\n");
        let path = temp_file.path().to_str().unwrap();
        set_env(POLICY_PATH_ENV, path);

        let policy = load_policy().unwrap();
        assert_eq!(policy.min[1], MinLength::Length(20));
        assert_eq!(policy.max, 256);
        assert!(!policy.deny_similar);
        assert_eq!(policy.passphrase_words, Policy::DEFAULT.passphrase_words);

        remove_env(POLICY_PATH_ENV);
    }

    #[test]
    fn test_load_policy_empty_file() {
        let temp_file = setup_with_tempfile("\n");

        let result = load_policy_from_path(temp_file.path());
        assert!(matches!(result, Err(PolicyLoadError::Parse(ParseError::Empty))));
    }

    #[test]
    fn test_load_policy_invalid_content() {
        let temp_file = setup_with_tempfile("max=0x400");

        let result = load_policy_from_path(temp_file.path());
        assert!(matches!(result, Err(PolicyLoadError::Parse(ParseError::InvalidValue(_)))));
    }
}
