//! Password quality checking library
//!
//! Checks passwords and passphrases against a configurable policy in the
//! style of passwdqc: minimum lengths that depend on how many character
//! classes a password uses, passphrase support, and rejection of passwords
//! that are based on the old password, the user name, a dictionary word or
//! a common character sequence.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_PATH`: Custom path to the policy file read by
//!   [`load_policy`] (default: `./assets/policy.conf`)
//!
//! # Example
//!
//! ```rust
//! use pwd_quality::{parse_policy, Checker, Reason, WordList};
//! use secrecy::SecretString;
//!
//! let policy = parse_policy("min=disabled,24,11,8,7 max=40 similar=deny").unwrap();
//! let checker = Checker::new(WordList::from_lines("password\ndragon\n"));
//!
//! let new = SecretString::new("password1".to_string().into());
//! let old = SecretString::new("password2".to_string().into());
//! assert_eq!(
//!     checker.check(&policy, Some(&new), Some(&old), None),
//!     Err(Reason::Similar)
//! );
//! ```

// Internal modules
mod config;
mod dictionary;
mod evaluator;
mod parser;
mod policy;
mod reason;
mod sections;

// Public API
pub use config::{
    get_policy_path, load_policy, load_policy_from_path, PolicyLoadError, POLICY_PATH_ENV,
};
pub use dictionary::{Dictionary, WordList};
pub use evaluator::Checker;
pub use parser::{parse_policy, ParseError};
pub use policy::{tier, MinLength, Policy, PolicyError};
pub use reason::Reason;
pub use sections::{
    classify, discount, is_dictionary_word, is_sequence, longest_common_substring,
    Classification, CommonSubstring,
};
