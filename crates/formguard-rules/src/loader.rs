// File: src/loader.rs
// Purpose: Rule file parsing (TOML) into a RuleSet

use crate::error::RuleSetError;
use crate::predicates::PredicateRegistry;
use crate::rule::FieldRule;
use crate::rule_set::RuleSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a rule file.
///
/// ```toml
/// [[field]]
/// id = "email"
/// label = "Email"
/// required = true
/// pattern = '^[^\s@]+@[^\s@]+\.[^\s@]+$'
/// pattern_message = "Please enter a valid email address"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

/// One `[[field]]` entry of a rule file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub id: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// `0` means unset
    #[serde(default)]
    pub min_length: Option<usize>,

    /// `0` means unset
    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub pattern_message: Option<String>,

    /// Predicate reference, `name` or `name:argument`
    #[serde(default)]
    pub custom: Option<String>,

    #[serde(default)]
    pub custom_message: Option<String>,
}

impl FieldSpec {
    /// Compile this entry, resolving its pattern and predicate
    pub fn compile(&self, registry: &PredicateRegistry) -> Result<FieldRule, RuleSetError> {
        let mut rule = FieldRule::new();

        if let Some(label) = &self.label {
            rule = rule.label(label.clone());
        }
        if self.required {
            rule = rule.required();
        }
        if let Some(min) = self.min_length.filter(|&n| n > 0) {
            rule = rule.min_length(min);
        }
        if let Some(max) = self.max_length.filter(|&n| n > 0) {
            rule = rule.max_length(max);
        }

        if let Some(pattern) = &self.pattern {
            let regex = Regex::new(pattern).map_err(|source| RuleSetError::InvalidPattern {
                field: self.id.clone(),
                source,
            })?;
            rule = match &self.pattern_message {
                Some(message) => rule.pattern_with_message(regex, message.clone()),
                None => rule.pattern(regex),
            };
        }

        if let Some(reference) = &self.custom {
            let predicate = registry.resolve(&self.id, reference)?;
            rule = match &self.custom_message {
                Some(message) => rule.custom_with_message(predicate, message.clone()),
                None => rule.custom(predicate),
            };
        }

        Ok(rule)
    }
}

impl RuleFile {
    /// Compile every entry, in file order
    pub fn compile(&self, registry: &PredicateRegistry) -> Result<RuleSet, RuleSetError> {
        let mut builder = RuleSet::builder();
        for spec in &self.fields {
            builder = builder.try_field(spec.id.clone(), spec.compile(registry)?)?;
        }
        Ok(builder.build())
    }
}

impl RuleSet {
    /// Parse a rule file from a TOML string
    pub fn from_toml_str(src: &str, registry: &PredicateRegistry) -> Result<Self, RuleSetError> {
        let file: RuleFile = toml::from_str(src)?;
        file.compile(registry)
    }

    /// Load a rule file from disk
    pub fn load(path: impl AsRef<Path>, registry: &PredicateRegistry) -> Result<Self, RuleSetError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| RuleSetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let rules = Self::from_toml_str(&content, registry)?;
        tracing::info!("Loaded {} field rules from {:?}", rules.len(), path);
        Ok(rules)
    }
}
