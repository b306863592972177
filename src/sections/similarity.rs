//! Similarity section - finds text shared between a password and a known
//! string such as the old password or the user name.

/// Longest run of characters shared by two strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSubstring {
    /// The shared text, as spelled in the first string.
    pub text: String,
    /// Length in characters.
    pub length: usize,
}

/// Single-character case folding. Keeps character positions aligned, which a
/// full `to_lowercase` does not for a few code points.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Case-insensitive longest common substring of `a` and `b`.
///
/// Uses the usual dynamic programming table with a single rolling row laid
/// over the shorter string. Ties keep the match that starts earliest in `a`.
pub fn longest_common_substring(a: &str, b: &str) -> CommonSubstring {
    let a: Vec<char> = a.chars().collect();
    let a_folded: Vec<char> = a.iter().map(|&c| fold_case(c)).collect();
    let b_folded: Vec<char> = b.chars().map(fold_case).collect();

    let a_on_row = a_folded.len() < b_folded.len();
    let (outer, inner) = if a_on_row {
        (&b_folded, &a_folded)
    } else {
        (&a_folded, &b_folded)
    };

    // row[j + 1] is the length of the common suffix of outer[..=i] and
    // inner[..=j].
    let mut row = vec![0usize; inner.len() + 1];
    let mut best_len = 0;
    let mut best_end = 0;

    for (i, &co) in outer.iter().enumerate() {
        let mut diagonal = 0;
        for (j, &ci) in inner.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if co == ci { diagonal + 1 } else { 0 };

            let len = row[j + 1];
            let end = if a_on_row { j + 1 } else { i + 1 };
            if len > best_len || (len > 0 && len == best_len && end < best_end) {
                best_len = len;
                best_end = end;
            }
            diagonal = above;
        }
    }

    CommonSubstring {
        text: a[best_end - best_len..best_end].iter().collect(),
        length: best_len,
    }
}

/// Removes the first case-insensitive occurrence of `substring` from
/// `password`. Returns the password unchanged when there is no occurrence.
pub fn discount(password: &str, substring: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    let needle: Vec<char> = substring.chars().map(fold_case).collect();
    if needle.is_empty() || needle.len() > chars.len() {
        return password.to_string();
    }

    let found = chars
        .windows(needle.len())
        .position(|w| w.iter().zip(&needle).all(|(&c, &n)| fold_case(c) == n));

    match found {
        Some(start) => chars[..start]
            .iter()
            .chain(&chars[start + needle.len()..])
            .collect(),
        None => password.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_substring_basic() {
        let found = longest_common_substring("password1", "password2");
        assert_eq!(found.text, "password");
        assert_eq!(found.length, 8);
    }

    #[test]
    fn test_common_substring_case_insensitive() {
        let found = longest_common_substring("xxHeLLoyy", "hello");
        assert_eq!(found.text, "HeLLo");
        assert_eq!(found.length, 5);
    }

    #[test]
    fn test_common_substring_contiguous_only() {
        let found = longest_common_substring("abcd", "axbxcxd");
        assert_eq!(found.length, 1);
        assert_eq!(found.text, "a");
    }

    #[test]
    fn test_common_substring_tie_keeps_earliest() {
        let found = longest_common_substring("abXYcd", "cdab");
        assert_eq!(found.text, "ab");
    }

    #[test]
    fn test_common_substring_shorter_first_string() {
        // Row runs over `a` here; "ab" is met first in `b`, "xy" wins.
        let found = longest_common_substring("xyab", "abqqqqxy");
        assert_eq!(found.text, "xy");
        assert_eq!(found.length, 2);

        let found = longest_common_substring("Pass", "my-password-1");
        assert_eq!(found.text, "Pass");
    }

    #[test]
    fn test_common_substring_none() {
        let found = longest_common_substring("abc", "xyz");
        assert_eq!(found.length, 0);
        assert_eq!(found.text, "");
        assert_eq!(longest_common_substring("", "abc").length, 0);
        assert_eq!(longest_common_substring("abc", "").length, 0);
    }

    #[test]
    fn test_common_substring_non_ascii() {
        let found = longest_common_substring("zÉtéx", "été");
        assert_eq!(found.text, "Été");
        assert_eq!(found.length, 3);
    }

    #[test]
    fn test_discount_removes_first_occurrence() {
        assert_eq!(discount("password1", "password"), "1");
        assert_eq!(discount("abcABCabc", "abc"), "ABCabc");
        assert_eq!(discount("xxABCxx", "abc"), "xxxx");
    }

    #[test]
    fn test_discount_empty_or_missing() {
        assert_eq!(discount("secret", ""), "secret");
        assert_eq!(discount("secret", "zzz"), "secret");
        assert_eq!(discount("ab", "abc"), "ab");
        assert_eq!(discount("abc", "ABC"), "");
    }
}
