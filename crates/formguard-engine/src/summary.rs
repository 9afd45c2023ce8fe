// File: src/summary.rs
// Purpose: Whole-form validation result with errors in field order

use serde::{Deserialize, Serialize};

/// A validation failure: which field, and what to tell the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of validating every field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub is_valid: bool,
    /// Failing fields only, in rule set order
    pub errors: Vec<FieldError>,
}

impl ValidationSummary {
    /// Build a summary from the failing fields; valid iff there are none
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.get_error(field).is_some()
    }

    /// Get error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Failing field ids, in order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "isValid": self.is_valid,
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({ "field": e.field, "message": e.message })
            }).collect::<Vec<_>>(),
        })
    }
}
