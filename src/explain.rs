//! Field name → human-readable explanation, passed explicitly to the
//! formatter.

use indexmap::IndexMap;
use serde::Deserialize;

/// Text used for fields nobody has explained yet.
pub const PLACEHOLDER: &str = "ready to fill in";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Explanations {
    fields: IndexMap<String, String>,
}

impl Explanations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, text: impl Into<String>) {
        self.fields.insert(field.into(), text.into());
    }

    /// Explanation for `field`, or [`PLACEHOLDER`].
    pub fn get(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER)
    }

    /// Entries from `other` win over existing ones.
    pub fn merge(&mut self, other: &Explanations) {
        for (field, text) in &other.fields {
            self.fields.insert(field.clone(), text.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Explanations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut explanations = Self::new();
        explanations.extend(iter);
        explanations
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Explanations {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (field, text) in iter {
            self.insert(field, text);
        }
    }
}
