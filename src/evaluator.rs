//! Password quality checker - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::dictionary::{Dictionary, WordList};
use crate::policy::{tier, Policy};
use crate::sections::{
    classify, discount, enough_different, fold_case, longest_common_substring, tier_reason,
    whole_pattern_reason, word_pattern_reason, Classification, SectionResult, CHARSET_PASSPHRASE,
};
use crate::Reason;

/// Checks candidate passwords against a [`Policy`].
///
/// The checker holds only the dictionary used to spot word-based passwords;
/// it keeps no state between calls and can be shared across threads when the
/// dictionary can.
#[derive(Debug, Clone, Default)]
pub struct Checker<D = WordList> {
    dictionary: D,
}

impl<D: Dictionary> Checker<D> {
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Checks `new_password` against `policy`.
    ///
    /// `old_password` and `username` are optional. When given, they are
    /// used to reject passwords that merely repeat or reshuffle them. An
    /// empty string is still compared; `None` skips the comparison.
    ///
    /// # Returns
    /// `Ok(())` if the password is acceptable, otherwise the first
    /// [`Reason`] it fails on.
    pub fn check(
        &self,
        policy: &Policy,
        new_password: Option<&SecretString>,
        old_password: Option<&SecretString>,
        username: Option<&str>,
    ) -> Result<(), Reason> {
        let result = self.evaluate(
            policy,
            new_password.map(|p| p.expose_secret()),
            old_password.map(|p| p.expose_secret()),
            username,
        );

        #[cfg(feature = "tracing")]
        {
            if let Err(reason) = &result {
                tracing::debug!("Password rejected: {}", reason.as_str());
            }
        }

        result
    }

    fn evaluate(
        &self,
        policy: &Policy,
        new_password: Option<&str>,
        old_password: Option<&str>,
        username: Option<&str>,
    ) -> Result<(), Reason> {
        let new_password = match new_password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(Reason::Empty),
        };

        if let Err(_e) = policy.validate() {
            #[cfg(feature = "tracing")]
            tracing::error!("Password check FAILED: invalid policy: {}", _e);
            return Err(Reason::Failed);
        }

        if old_password.is_some_and(|old| same_folded(new_password, old)) {
            return Err(Reason::Same);
        }

        if new_password.chars().count() > policy.max {
            return Err(Reason::Long);
        }

        if policy.match_length > 0 {
            if let Some(old) = old_password {
                if policy.deny_similar && self.is_based_on(policy, new_password, old, username) {
                    return Err(Reason::Similar);
                }
            }
            if let Some(user) = username {
                if self.is_based_on(policy, new_password, user, username) {
                    return Err(Reason::Personal);
                }
            }
        }

        match self.strength_reason(policy, new_password, username, false) {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }

    /// Whether `candidate` shares a long enough substring with `reference`,
    /// read forwards or backwards, and is weak once that part is removed.
    fn is_based_on(
        &self,
        policy: &Policy,
        candidate: &str,
        reference: &str,
        username: Option<&str>,
    ) -> bool {
        let forward = longest_common_substring(candidate, reference);
        let reversed: String = reference.chars().rev().collect();
        let backward = longest_common_substring(candidate, &reversed);
        let best = if backward.length > forward.length {
            backward
        } else {
            forward
        };

        if best.length < policy.match_length {
            return false;
        }

        let remainder = discount(candidate, &best.text);
        self.strength_reason(policy, &remainder, username, true).is_some()
    }

    /// Runs the passphrase or class-tier checks, then the personal check.
    fn strength_reason(
        &self,
        policy: &Policy,
        candidate: &str,
        username: Option<&str>,
        discounted: bool,
    ) -> SectionResult {
        let classification = classify(candidate);
        let words = candidate.split_whitespace().count();

        let reason = if policy.passphrase_words > 0 && words >= policy.passphrase_words {
            word_pattern_reason(&self.dictionary, candidate).or_else(|| {
                if is_passphrase(policy, &classification) {
                    None
                } else {
                    tier_reason(policy, &classification, discounted)
                }
            })
        } else {
            tier_reason(policy, &classification, discounted)
                .or_else(|| whole_pattern_reason(&self.dictionary, candidate))
        };

        reason.or_else(|| personal_reason(policy, candidate, username))
    }
}

/// Long enough and varied enough to be accepted as a passphrase.
fn is_passphrase(policy: &Policy, classification: &Classification) -> bool {
    match policy.min[tier::PASSPHRASE].length() {
        Some(min) => {
            classification.length >= min
                && enough_different(classification, CHARSET_PASSPHRASE, min)
        }
        None => false,
    }
}

/// The password and the user name equal or contain one another.
fn personal_reason(policy: &Policy, candidate: &str, username: Option<&str>) -> SectionResult {
    let username = username?;
    let candidate = fold_str(candidate);
    let username = fold_str(username);

    if candidate == username {
        return Some(Reason::Personal);
    }
    if policy.match_length == 0 {
        return None;
    }

    let contains = |haystack: &str, needle: &str| {
        needle.chars().count() >= policy.match_length && haystack.contains(needle)
    };
    if contains(&username, &candidate) || contains(&candidate, &username) {
        return Some(Reason::Personal);
    }
    None
}

fn fold_str(s: &str) -> String {
    s.chars().map(fold_case).collect()
}

fn same_folded(a: &str, b: &str) -> bool {
    a.chars().map(fold_case).eq(b.chars().map(fold_case))
}
