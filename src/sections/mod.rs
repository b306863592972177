//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of a candidate password. The
//! evaluator combines them into a single verdict.

mod length;
mod pattern;
mod similarity;
mod variety;

pub use length::{enough_different, tier_reason, CHARSET_PASSPHRASE};
pub use pattern::{is_dictionary_word, is_sequence, whole_pattern_reason, word_pattern_reason};
pub use similarity::{discount, fold_case, longest_common_substring, CommonSubstring};
pub use variety::{classify, Classification};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<crate::Reason>;
