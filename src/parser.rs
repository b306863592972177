//! Policy text parser.
//!
//! The format is a list of `name=value` items separated by spaces or
//! newlines:
//!
//! ```text
//! min=disabled,24,11,8,7 max=1024 passphrase=3 match=4 similar=deny
//! ```
//!
//! Items may appear in any order; items that are left out keep their value
//! from [`Policy::DEFAULT`].

use thiserror::Error;

use crate::policy::{MinLength, Policy, PolicyError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("policy text contains no items")]
    Empty,
    #[error("malformed policy item: {0}")]
    Malformed(String),
    #[error("unknown policy item: {0}")]
    UnknownItem(String),
    #[error("invalid value in policy item: {0}")]
    InvalidValue(String),
    #[error("policy item {token} needs 5 values, found {found}")]
    WrongArity { token: String, found: usize },
    #[error("invalid policy: {0}")]
    Invalid(#[from] PolicyError),
}

/// Parses a policy from its text form.
///
/// Fails on the first malformed item. Input without any item is an error,
/// not the default policy.
pub fn parse_policy(text: &str) -> Result<Policy, ParseError> {
    let mut policy = Policy::DEFAULT;
    let mut items = 0;

    for token in text.split([' ', '\n']).filter(|t| !t.is_empty()) {
        if let Err(e) = apply_item(&mut policy, token) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Policy parse FAILED: {}", e);
            return Err(e);
        }
        items += 1;
    }

    if items == 0 {
        return Err(ParseError::Empty);
    }

    policy.validate()?;
    Ok(policy)
}

fn apply_item(policy: &mut Policy, token: &str) -> Result<(), ParseError> {
    let Some((name, value)) = token.split_once('=') else {
        return Err(ParseError::Malformed(token.to_string()));
    };

    match name {
        "min" => {
            let values: Vec<&str> = value.split(',').collect();
            if values.len() != policy.min.len() {
                return Err(ParseError::WrongArity {
                    token: token.to_string(),
                    found: values.len(),
                });
            }
            for (slot, value) in policy.min.iter_mut().zip(values) {
                *slot = if value == "disabled" {
                    MinLength::Disabled
                } else {
                    MinLength::Length(parse_decimal(value, token)?)
                };
            }
        }
        "max" => policy.max = parse_decimal(value, token)?,
        "passphrase" => policy.passphrase_words = parse_decimal(value, token)?,
        "match" => policy.match_length = parse_decimal(value, token)?,
        "similar" => {
            policy.deny_similar = match value {
                "permit" => false,
                "deny" => true,
                _ => return Err(ParseError::InvalidValue(token.to_string())),
            }
        }
        _ => return Err(ParseError::UnknownItem(token.to_string())),
    }
    Ok(())
}

/// Plain base-10 digits only: no sign, no base prefix, no whitespace.
fn parse_decimal(value: &str, token: &str) -> Result<usize, ParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidValue(token.to_string()));
    }
    value
        .parse()
        .map_err(|_| ParseError::InvalidValue(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::strategy::arb_policy;
    use proptest::prelude::*;

    #[test]
    fn test_parse_full_policy() {
        let policy =
            parse_policy("min=disabled,24,11,8,7 max=1024 passphrase=3 match=4 similar=deny")
                .unwrap();
        assert_eq!(policy, Policy::DEFAULT);
    }

    #[test]
    fn test_parse_is_order_independent() {
        let a = parse_policy("similar=permit\nmax=64 min=disabled,20,12,10,8").unwrap();
        let b = parse_policy("min=disabled,20,12,10,8 max=64\nsimilar=permit").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.max, 64);
        assert!(!a.deny_similar);
        assert_eq!(a.min[1], MinLength::Length(20));
    }

    #[test]
    fn test_parse_inherits_defaults() {
        let policy = parse_policy("passphrase=0").unwrap();
        assert_eq!(policy.passphrase_words, 0);
        assert_eq!(policy.min, Policy::DEFAULT.min);
        assert_eq!(policy.match_length, 4);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_policy(""), Err(ParseError::Empty));
        assert_eq!(parse_policy(" "), Err(ParseError::Empty));
        assert_eq!(parse_policy("\n \n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            parse_policy("min=16,17,18,19"),
            Err(ParseError::WrongArity {
                token: "min=16,17,18,19".to_string(),
                found: 4
            })
        );
        assert!(parse_policy("min=1,1,1,1,1,1").is_err());
    }

    #[test]
    fn test_parse_rejects_alternate_bases_and_signs() {
        for text in ["max=0x10", "max=+10", "max=-1", "match=1e3", "max= 10", "max="] {
            assert!(
                matches!(parse_policy(text), Err(ParseError::InvalidValue(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_error_names_token() {
        assert_eq!(
            parse_policy("max=64 bogus=1"),
            Err(ParseError::UnknownItem("bogus=1".to_string()))
        );
        assert_eq!(
            parse_policy("similar=maybe"),
            Err(ParseError::InvalidValue("similar=maybe".to_string()))
        );
        assert_eq!(
            parse_policy("max"),
            Err(ParseError::Malformed("max".to_string()))
        );
        assert_eq!(
            parse_policy("min=disabled,24,eleven,8,7"),
            Err(ParseError::InvalidValue("min=disabled,24,eleven,8,7".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_integer_overflow() {
        assert!(parse_policy("max=99999999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_validates_invariants() {
        assert_eq!(
            parse_policy("min=disabled,8,9,10,11"),
            Err(ParseError::Invalid(PolicyError::MinNotDescending { index: 2 }))
        );
        assert_eq!(
            parse_policy("max=10"),
            Err(ParseError::Invalid(PolicyError::MaxBelowMin { index: 1 }))
        );
    }

    proptest! {
        #[test]
        fn prop_display_round_trips(policy in arb_policy(200)) {
            prop_assert_eq!(policy.validate(), Ok(()));
            let text = policy.to_string();
            prop_assert_eq!(parse_policy(&text), Ok(policy));
        }

        #[test]
        fn prop_parse_never_panics(text in "[a-z0-9=, \n]{0,40}") {
            let _ = parse_policy(&text);
        }
    }
}
