//! Pattern analysis section - detects dictionary words and common
//! character sequences.

use super::similarity::fold_case;
use super::SectionResult;
use crate::dictionary::Dictionary;
use crate::Reason;

/// Keyboard rows and columns people type as "random" passwords.
const KEYBOARD_SEQUENCES: &[&str] = &[
    "`1234567890-=",
    "~!@#$%^&*()_+",
    "qwertyuiop[]\\",
    "asdfghjkl;'",
    "zxcvbnm,./",
    "qwertzuiop",
    "yxcvbnm",
    "azertyuiop",
    "qsdfghjklm",
    "wxcvbn",
    "1qaz2wsx3edc4rfv5tgb6yhn7ujm8ik9ol0p",
    "qazwsxedcrfvtgbyhnujmikolp",
];

/// Minimum length of a run before it counts as a sequence.
const MIN_SEQUENCE_LENGTH: usize = 3;

fn unleet(c: char) -> char {
    match c {
        '0' => 'o',
        '1' | '!' | '|' => 'l',
        '3' => 'e',
        '4' | '@' => 'a',
        '5' | '$' => 's',
        '7' => 't',
        '8' => 'b',
        other => other,
    }
}

/// Checks `token` against the dictionary, both as typed and with common
/// leet-speak substitutions undone.
pub fn is_dictionary_word<D: Dictionary + ?Sized>(dictionary: &D, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let lower = token.to_lowercase();
    if dictionary.contains(&lower) {
        return true;
    }
    let plain: String = lower.chars().map(unleet).collect();
    plain != lower && dictionary.contains(&plain)
}

/// Whether `s` is an ascending or descending run (`abcde`, `54321`), a
/// piece of a keyboard row (`qwerty`), or one character repeated (`aaaa`).
pub fn is_sequence(s: &str) -> bool {
    let chars: Vec<char> = s.chars().map(fold_case).collect();
    if chars.len() < MIN_SEQUENCE_LENGTH {
        return false;
    }

    let step = |w: &[char]| w[1] as i64 - w[0] as i64;
    let first = step(&chars[..2]);
    if matches!(first, -1..=1) && chars.windows(2).all(|w| step(w) == first) {
        return true;
    }

    let forward: String = chars.iter().collect();
    let backward: String = chars.iter().rev().collect();
    KEYBOARD_SEQUENCES
        .iter()
        .any(|row| row.contains(forward.as_str()) || row.contains(backward.as_str()))
}

/// Checks the candidate as a single token, without splitting it into words.
pub fn whole_pattern_reason<D: Dictionary + ?Sized>(
    dictionary: &D,
    candidate: &str,
) -> SectionResult {
    if is_dictionary_word(dictionary, candidate) {
        return Some(Reason::Word);
    }
    if is_sequence(candidate) {
        return Some(Reason::Seq);
    }
    None
}

/// Checks each whitespace-separated word of a passphrase, then the whole
/// phrase when it consists of more than one word.
pub fn word_pattern_reason<D: Dictionary + ?Sized>(
    dictionary: &D,
    candidate: &str,
) -> SectionResult {
    let words: Vec<&str> = candidate.split_whitespace().collect();
    let whole = if words.len() > 1 { Some(candidate) } else { None };

    words
        .iter()
        .copied()
        .chain(whole)
        .find_map(|token| whole_pattern_reason(dictionary, token))
}
