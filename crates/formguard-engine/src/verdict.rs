// File: src/verdict.rs
// Purpose: Outcome of one field evaluation and the tracked per-field state

use serde::{Deserialize, Serialize};

/// Pass/fail outcome of evaluating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVerdict {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldVerdict {
    pub fn valid() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Failure message, `None` when the field passed
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Last known state of a field.
///
/// ```text
/// Untouched --evaluate--> Valid | Invalid
/// Valid <--re-evaluate--> Invalid
/// Valid | Invalid --clear--> Untouched
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<&FieldVerdict> for FieldState {
    fn from(verdict: &FieldVerdict) -> Self {
        match (&verdict.message, verdict.ok) {
            (Some(message), false) => FieldState::Invalid(message.clone()),
            (None, false) => FieldState::Invalid(String::new()),
            (_, true) => FieldState::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verdict_constructors() {
        assert!(FieldVerdict::valid().is_ok());
        assert_eq!(FieldVerdict::valid().message(), None);

        let failed = FieldVerdict::invalid("Email is required");
        assert!(!failed.is_ok());
        assert_eq!(failed.message(), Some("Email is required"));
    }

    #[test]
    fn test_state_from_verdict() {
        assert_eq!(FieldState::from(&FieldVerdict::valid()), FieldState::Valid);
        assert_eq!(
            FieldState::from(&FieldVerdict::invalid("bad")),
            FieldState::Invalid("bad".to_string())
        );
    }

    #[test]
    fn test_state_error() {
        assert_eq!(FieldState::Untouched.error(), None);
        assert_eq!(FieldState::Valid.error(), None);
        assert_eq!(FieldState::Invalid("bad".into()).error(), Some("bad"));
        assert!(FieldState::Invalid("bad".into()).is_invalid());
        assert_eq!(FieldState::default(), FieldState::Untouched);
    }

    #[test]
    fn test_serialization_shape() {
        let verdict = serde_json::to_value(FieldVerdict::valid()).unwrap();
        assert_eq!(verdict, serde_json::json!({ "ok": true }));

        let state = serde_json::to_value(FieldState::Invalid("bad".into())).unwrap();
        assert_eq!(state, serde_json::json!({ "state": "invalid", "message": "bad" }));

        let state = serde_json::to_value(FieldState::Untouched).unwrap();
        assert_eq!(state, serde_json::json!({ "state": "untouched" }));
    }
}
