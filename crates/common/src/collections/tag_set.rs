//! Insertion-ordered set of free-text labels.
//!
//! A [`TagSet`] keeps the first spelling of every label it receives and
//! rejects later entries that differ only by case or surrounding whitespace.
//! Blank entries are ignored. Iteration yields labels in the order they were
//! first inserted.
//!
//! # Complexity
//! - `insert` and `contains` are **O(n)** in the label length (one lowercase
//!   key is built per call) and expected **O(1)** in the set size.

use std::collections::HashSet;

/// Case-insensitive, order-preserving set of trimmed strings.
///
/// # Examples
///
/// ```rust
/// use profilehub_common::collections::TagSet;
///
/// let tags: TagSet = ["Rust", " rust ", "", "Go"].into_iter().collect();
/// assert_eq!(tags.into_vec(), vec!["Rust".to_string(), "Go".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    items: Vec<String>,
    keys: HashSet<String>,
}

impl TagSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a label, trimming it first.
    ///
    /// Returns `true` if the label was added, `false` if it was blank or a
    /// case-insensitive duplicate of an existing label.
    pub fn insert(&mut self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        if !self.keys.insert(trimmed.to_lowercase()) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Returns `true` if an equivalent label is present.
    pub fn contains(&self, value: &str) -> bool {
        self.keys.contains(&value.trim().to_lowercase())
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no labels are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates labels in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Consumes the set, returning the labels in first-insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.as_ref());
        }
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
