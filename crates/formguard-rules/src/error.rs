// File: src/error.rs
// Purpose: Errors raised while building rule sets from rule files

use std::path::PathBuf;
use thiserror::Error;

/// A rule file that could not be turned into a [`RuleSet`](crate::RuleSet).
///
/// These are authoring errors in the rule definition itself. Field values that
/// fail validation are never reported through this type.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("Failed to read rule file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown predicate '{name}' referenced by field '{field}'")]
    UnknownPredicate { field: String, name: String },

    #[error("Invalid argument for predicate '{name}': {reason}")]
    InvalidPredicateArgument { name: String, reason: String },

    #[error("Duplicate field '{0}' in rule set")]
    DuplicateField(String),
}
