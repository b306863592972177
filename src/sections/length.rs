//! Length section - picks the minimum length tier for a password and checks
//! it against that tier.

use super::variety::Classification;
use super::SectionResult;
use crate::policy::{tier, MinLength, Policy};
use crate::Reason;

const FIXED_BITS: u32 = 15;

/// Symbols available to a password with one, two, three or four classes.
const CHARSET_ONE_CLASS: u64 = 10;
const CHARSET_TWO_CLASSES: u64 = 36;
const CHARSET_THREE_CLASSES: u64 = 62;
const CHARSET_FOUR_CLASSES: u64 = 95;
/// Lower-case letters plus the space between words.
pub const CHARSET_PASSPHRASE: u64 = 27;

/// Expected number of different characters in a random string of `length`
/// characters drawn from `charset` symbols, in 15-bit fixed point.
pub fn expected_different(charset: u64, length: usize) -> usize {
    if charset == 0 || length == 0 {
        return 0;
    }
    let x = ((charset - 1) << FIXED_BITS) / charset;
    let mut y = x;
    for _ in 1..length {
        y = (y * x) >> FIXED_BITS;
        if y == 0 {
            break;
        }
    }
    let z = charset * ((1 << FIXED_BITS) - y);
    (z >> FIXED_BITS) as usize
}

/// Whether the password has enough different characters for a tier of
/// `min` characters over `charset` symbols.
pub fn enough_different(classification: &Classification, charset: u64, min: usize) -> bool {
    classification.distinct >= expected_different(charset, min).saturating_sub(1)
}

/// Checks a password against the tier selected by its number of classes.
///
/// `discounted` marks a re-check of a password with a shared substring
/// removed; such passwords report `SimpleShort` rather than `Short` and
/// skip the overall minimum.
///
/// # Returns
/// - `Some(reason)` if the password does not meet its tier
/// - `None` if it does
pub fn tier_reason(
    policy: &Policy,
    classification: &Classification,
    discounted: bool,
) -> SectionResult {
    let length = classification.length;

    if !discounted && policy.shortest_min().is_some_and(|min| length < min) {
        return Some(Reason::Short);
    }

    let (index, charset) = match classification.classes() {
        0 => return Some(Reason::SimpleShort),
        1 => (tier::ONE_CLASS, CHARSET_ONE_CLASS),
        2 => (tier::TWO_CLASSES, CHARSET_TWO_CLASSES),
        3 => (tier::THREE_CLASSES, CHARSET_THREE_CLASSES),
        _ => (tier::FOUR_CLASSES, CHARSET_FOUR_CLASSES),
    };

    let MinLength::Length(min) = policy.min[index] else {
        return Some(Reason::SimpleShort);
    };
    if length < min {
        return Some(if discounted {
            Reason::SimpleShort
        } else {
            Reason::Short
        });
    }
    if !enough_different(classification, charset, min) {
        return Some(Reason::Simple);
    }
    None
}
