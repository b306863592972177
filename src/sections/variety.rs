//! Character variety section - sorts characters into classes.

use std::collections::HashSet;

/// Character class membership of a candidate password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub digits: usize,
    pub lowers: usize,
    pub uppers: usize,
    /// ASCII characters that are neither letters nor digits.
    pub others: usize,
    /// Code points at or above 128; these cannot be classified further.
    pub non_ascii: usize,
    /// Length in characters.
    pub length: usize,
    /// Number of different characters.
    pub distinct: usize,
}

impl Classification {
    pub fn has_digit(&self) -> bool {
        self.digits > 0
    }

    pub fn has_lower(&self) -> bool {
        self.lowers > 0
    }

    pub fn has_upper(&self) -> bool {
        self.uppers > 0
    }

    /// Other ASCII or non-ASCII characters are present.
    pub fn has_other(&self) -> bool {
        self.others > 0 || self.non_ascii > 0
    }

    /// Number of distinct classes. Non-ASCII characters share the bucket of
    /// other ASCII characters, so the result is at most 4.
    pub fn classes(&self) -> usize {
        [
            self.has_digit(),
            self.has_lower(),
            self.has_upper(),
            self.has_other(),
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

/// Classifies every code point of `password`.
pub fn classify(password: &str) -> Classification {
    let mut result = Classification::default();
    let mut seen = HashSet::new();

    for c in password.chars() {
        result.length += 1;
        if seen.insert(c) {
            result.distinct += 1;
        }

        if !c.is_ascii() {
            result.non_ascii += 1;
        } else if c.is_ascii_digit() {
            result.digits += 1;
        } else if c.is_ascii_lowercase() {
            result.lowers += 1;
        } else if c.is_ascii_uppercase() {
            result.uppers += 1;
        } else {
            result.others += 1;
        }
    }
    result
}
