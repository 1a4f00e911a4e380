//! Utility types for validation.

use std::collections::HashSet;

/// A word set with case-insensitive, whitespace-tolerant membership.
///
/// Entries are stored trimmed and lowercased, matching how candidates are
/// normalized before they reach the dictionary stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseInsensitiveSet {
    inner: HashSet<String>,
}

impl CaseInsensitiveSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Insert a value into the set. Blank values are ignored.
    pub fn insert(&mut self, value: impl AsRef<str>) -> bool {
        let key = fold(value.as_ref());
        if key.is_empty() {
            return false;
        }
        self.inner.insert(key)
    }

    /// Check if the set contains a value (case-insensitive).
    pub fn contains(&self, value: impl AsRef<str>) -> bool {
        self.inner.contains(&fold(value.as_ref()))
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CaseInsensitiveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for CaseInsensitiveSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}
