//! Password quality policy.

use std::fmt;
use thiserror::Error;

/// Minimum length requirement for one kind of password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinLength {
    /// Passwords of this kind are never accepted, regardless of length.
    Disabled,
    /// Passwords of this kind need at least this many characters.
    Length(usize),
}

impl MinLength {
    /// Returns the length, or `None` when disabled.
    pub fn length(self) -> Option<usize> {
        match self {
            MinLength::Disabled => None,
            MinLength::Length(n) => Some(n),
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, MinLength::Disabled)
    }

    /// Whether `len` characters satisfy this requirement.
    pub fn allows(self, len: usize) -> bool {
        self.length().is_some_and(|min| len >= min)
    }
}

impl fmt::Display for MinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinLength::Disabled => f.write_str("disabled"),
            MinLength::Length(n) => write!(f, "{}", n),
        }
    }
}

/// Index into [`Policy::min`] for each kind of password.
pub mod tier {
    /// One character class.
    pub const ONE_CLASS: usize = 0;
    /// Two character classes.
    pub const TWO_CLASSES: usize = 1;
    /// Passphrases.
    pub const PASSPHRASE: usize = 2;
    /// Three character classes.
    pub const THREE_CLASSES: usize = 3;
    /// Four character classes.
    pub const FOUR_CLASSES: usize = 4;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("min[{index}] is larger than an earlier enabled tier")]
    MinNotDescending { index: usize },
    #[error("max is smaller than min[{index}]")]
    MaxBelowMin { index: usize },
}

/// A password strength policy.
///
/// `min[0]` applies to passwords made of one character class, `min[1]` to
/// two classes, `min[2]` to passphrases, `min[3]` and `min[4]` to three and
/// four classes. The character classes are digits, lower-case letters,
/// upper-case letters and other characters; non-ASCII characters count as
/// "other".
///
/// Enabled entries from `min[1]` onwards must not grow, and `max` must be at
/// least every enabled minimum. Use [`Policy::validate`] after mutating the
/// fields by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Policy {
    pub min: [MinLength; 5],
    /// Maximum allowed password length.
    pub max: usize,
    /// Words required for a passphrase; 0 disables passphrases.
    pub passphrase_words: usize,
    /// Common substring length that marks a password as based on another
    /// string; 0 disables the substring search.
    pub match_length: usize,
    /// Reject passwords that are weak once the part shared with the old
    /// password is discounted.
    pub deny_similar: bool,
}

impl Policy {
    pub const DEFAULT: Policy = Policy {
        min: [
            MinLength::Disabled,
            MinLength::Length(24),
            MinLength::Length(11),
            MinLength::Length(8),
            MinLength::Length(7),
        ],
        max: 1024,
        passphrase_words: 3,
        match_length: 4,
        deny_similar: true,
    };

    /// Checks the ordering and bound invariants.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (index, min) in self.min.iter().enumerate() {
            if let Some(len) = min.length() {
                if len > self.max {
                    return Err(PolicyError::MaxBelowMin { index });
                }
            }
        }

        let mut floor: Option<usize> = None;
        for index in tier::TWO_CLASSES..self.min.len() {
            if let Some(len) = self.min[index].length() {
                if floor.is_some_and(|prev| len > prev) {
                    return Err(PolicyError::MinNotDescending { index });
                }
                floor = Some(len);
            }
        }
        Ok(())
    }

    /// Smallest enabled minimum length, if any tier is enabled.
    pub fn shortest_min(&self) -> Option<usize> {
        self.min.iter().filter_map(|m| m.length()).min()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Canonical text form, accepted back by [`crate::parse_policy`].
impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [m0, m1, m2, m3, m4] = &self.min;
        write!(
            f,
            "min={},{},{},{},{} max={} passphrase={} match={} similar={}",
            m0,
            m1,
            m2,
            m3,
            m4,
            self.max,
            self.passphrase_words,
            self.match_length,
            if self.deny_similar { "deny" } else { "permit" }
        )
    }
}
