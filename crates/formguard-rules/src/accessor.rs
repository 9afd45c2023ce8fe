// File: src/accessor.rs
// Purpose: Read-only access to form values and externally supplied field labels

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Read-only view of the current raw values of a form.
///
/// Custom predicates receive one of these so they can look at other fields
/// (confirmation passwords and the like). Implementations must not mutate
/// anything through it.
pub trait FormAccessor {
    /// Raw, untrimmed value of `field`, or `None` if the form has no such field
    fn get_value(&self, field: &str) -> Option<&str>;

    /// Raw value of `field`, treating a missing field as empty
    fn value_or_empty(&self, field: &str) -> &str {
        self.get_value(field).unwrap_or("")
    }
}

impl FormAccessor for HashMap<String, String> {
    fn get_value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FormAccessor for BTreeMap<String, String> {
    fn get_value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<T: FormAccessor + ?Sized> FormAccessor for &T {
    fn get_value(&self, field: &str) -> Option<&str> {
        (**self).get_value(field)
    }
}

/// Owned field values of a single form instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    /// Create an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set (or replace) the value of a field
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Remove a field, returning its previous value
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.values.remove(field)
    }

    /// Number of fields with a value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no field has a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(field, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another set of values into this one; `other` wins on conflicts
    pub fn extend(&mut self, other: FormValues) {
        self.values.extend(other.values);
    }
}

impl FormAccessor for FormValues {
    fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// External field id -> display name lookup (e.g. the text of an HTML `<label>`)
pub trait LabelLookup {
    /// Display label for `field`, or `None` to fall back to the rule set
    fn label(&self, field: &str) -> Option<String>;
}

impl LabelLookup for HashMap<String, String> {
    fn label(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl LabelLookup for BTreeMap<String, String> {
    fn label(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

/// Strip required-field markers and surrounding whitespace from label text.
///
/// `"First Name *"` becomes `"First Name"`.
pub fn normalize_label(raw: &str) -> String {
    raw.replace('*', "").trim().to_string()
}
