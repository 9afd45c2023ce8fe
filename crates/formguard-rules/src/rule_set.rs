// File: src/rule_set.rs
// Purpose: Immutable, ordered mapping from field id to its rules

use crate::error::RuleSetError;
use crate::rule::FieldRule;
use std::collections::HashMap;

/// Field id -> [`FieldRule`], in insertion order.
///
/// Insertion order is the order in which a whole form is evaluated and in
/// which its errors are reported. Each field is still evaluated independently.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(String, FieldRule)>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Rules for a field, or `None` if the field is not part of this form
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.index.get(field).map(|&i| &self.fields[i].1)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    /// Position of a field in key order
    pub fn position(&self, field: &str) -> Option<usize> {
        self.index.get(field).copied()
    }

    /// Field ids in key order
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Configured label of a field, falling back to the raw field id
    pub fn label_for(&self, field: &str) -> String {
        self.get(field)
            .and_then(FieldRule::label_text)
            .unwrap_or(field)
            .to_string()
    }
}

/// Builder for [`RuleSet`]
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    fields: Vec<(String, FieldRule)>,
    index: HashMap<String, usize>,
}

impl RuleSetBuilder {
    /// Add rules for a field.
    ///
    /// Adding the same id twice replaces the earlier rules but keeps the
    /// field's original position.
    pub fn field(mut self, id: impl Into<String>, rule: FieldRule) -> Self {
        let id = id.into();
        match self.index.get(&id) {
            Some(&i) => self.fields[i].1 = rule,
            None => {
                self.index.insert(id.clone(), self.fields.len());
                self.fields.push((id, rule));
            }
        }
        self
    }

    /// Add rules for a field, rejecting duplicate ids
    pub fn try_field(self, id: impl Into<String>, rule: FieldRule) -> Result<Self, RuleSetError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(RuleSetError::DuplicateField(id));
        }
        Ok(self.field(id, rule))
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            fields: self.fields,
            index: self.index,
        }
    }
}
