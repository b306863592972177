//! Dictionary lookup used to spot passwords built from common words.
//!
//! The checker never loads word lists itself; callers hand it anything that
//! implements [`Dictionary`].

use std::collections::HashSet;
use std::sync::Arc;

/// Read-only, case-insensitive word lookup.
pub trait Dictionary {
    /// Returns `true` if `word` is in the dictionary.
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, &word.to_lowercase())
    }
}

/// In-memory word list. Entries are stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from newline-separated text, ignoring blank lines.
    pub fn from_lines(content: &str) -> Self {
        content.lines().collect()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = WordList::new();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
