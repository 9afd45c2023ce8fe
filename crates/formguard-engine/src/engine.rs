// File: src/engine.rs
// Purpose: Rule interpreter and per-field state tracking for one form instance

use crate::summary::{FieldError, ValidationSummary};
use crate::verdict::{FieldState, FieldVerdict};
use formguard_rules::{normalize_label, FormAccessor, LabelLookup, Rule, RuleSet};
use std::collections::HashMap;
use std::fmt;

/// Validates the fields of one form instance and remembers their state.
///
/// The engine owns its state map; create one engine per form instance. The
/// same [`RuleSet`] can back any number of engines.
///
/// Every field is checked in a fixed order, and the first failing check wins:
///
/// 1. required and empty -> `"<label> is required"`
/// 2. empty and optional -> valid, nothing else runs
/// 3. min length -> `"<label> must be at least N characters long"`
/// 4. max length -> `"<label> must not exceed N characters"`
/// 5. pattern -> configured message or `"<label> format is invalid"`
/// 6. custom predicate -> configured message or `"<label> is invalid"`
///
/// Values are trimmed before any check runs.
pub struct ValidationEngine {
    rules: RuleSet,
    states: HashMap<String, FieldState>,
    labels: Option<Box<dyn LabelLookup + Send + Sync>>,
}

impl ValidationEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            states: HashMap::new(),
            labels: None,
        }
    }

    /// Use an external label source (e.g. the form's `<label>` texts).
    ///
    /// Labels from it are normalized with [`normalize_label`] and take
    /// precedence over labels configured in the rule set.
    pub fn with_labels(mut self, labels: impl LabelLookup + Send + Sync + 'static) -> Self {
        self.labels = Some(Box::new(labels));
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Display label of a field: external lookup, then rule set, then the id
    pub fn label(&self, field: &str) -> String {
        self.labels
            .as_ref()
            .and_then(|labels| labels.label(field))
            .map(|raw| normalize_label(&raw))
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| self.rules.label_for(field))
    }

    /// Evaluate one field and record the outcome.
    ///
    /// `form` gives custom predicates read access to the other fields. Fields
    /// without rules always pass and are not tracked.
    pub fn evaluate_field(
        &mut self,
        field: &str,
        raw_value: &str,
        form: &dyn FormAccessor,
    ) -> FieldVerdict {
        let verdict = self.check_field(field, raw_value, form);

        if self.rules.contains(field) {
            self.states
                .insert(field.to_string(), FieldState::from(&verdict));
        }

        verdict
    }

    /// Evaluate one field without touching any state
    pub fn check_field(&self, field: &str, raw_value: &str, form: &dyn FormAccessor) -> FieldVerdict {
        let Some(field_rule) = self.rules.get(field) else {
            tracing::warn!("No rules registered for field '{}', treating as valid", field);
            return FieldVerdict::valid();
        };

        let value = raw_value.trim();
        let label = self.label(field);

        if value.is_empty() {
            if field_rule.is_required() {
                return self.fail(field, format!("{} is required", label));
            }
            // Empty optional field: nothing else applies
            tracing::trace!("Field '{}' is empty and optional", field);
            return FieldVerdict::valid();
        }

        for rule in field_rule.checks() {
            tracing::trace!("Checking field '{}' against {}", field, rule);
            if let Some(message) = check_rule(rule, value, &label, form) {
                return self.fail(field, message);
            }
        }

        tracing::debug!("Field '{}' is valid", field);
        FieldVerdict::valid()
    }

    fn fail(&self, field: &str, message: String) -> FieldVerdict {
        tracing::debug!("Field '{}' failed: {}", field, message);
        FieldVerdict::invalid(message)
    }

    /// Forget the field's verdict without re-running any rule
    pub fn clear_field(&mut self, field: &str) {
        if self.states.remove(field).is_some() {
            tracing::trace!("Cleared field '{}'", field);
        }
    }

    /// Field-change event from the view layer
    pub fn on_field_evaluate(
        &mut self,
        field: &str,
        raw_value: &str,
        form: &dyn FormAccessor,
    ) -> FieldVerdict {
        self.evaluate_field(field, raw_value, form)
    }

    /// Field-edited event from the view layer
    pub fn on_field_clear(&mut self, field: &str) {
        self.clear_field(field)
    }

    /// Evaluate every field of the rule set, in order, reading values from `form`.
    ///
    /// Fields missing from `form` are evaluated as empty.
    pub fn evaluate_all(&mut self, form: &dyn FormAccessor) -> ValidationSummary {
        let fields: Vec<String> = self.rules.field_ids().map(str::to_string).collect();

        let errors: Vec<FieldError> = fields
            .iter()
            .filter_map(|field| {
                let value = form.value_or_empty(field);
                let verdict = self.evaluate_field(field, value, form);
                if verdict.ok {
                    None
                } else {
                    let message = verdict.message.unwrap_or_default();
                    Some(FieldError::new(field.as_str(), message))
                }
            })
            .collect();

        tracing::debug!(
            "Evaluated {} fields, {} invalid",
            fields.len(),
            errors.len()
        );
        ValidationSummary::from_errors(errors)
    }

    /// Current state of a field
    pub fn state(&self, field: &str) -> FieldState {
        self.states.get(field).cloned().unwrap_or_default()
    }

    /// Stored error message of a field, if it is currently invalid
    pub fn error(&self, field: &str) -> Option<&str> {
        self.states.get(field).and_then(FieldState::error)
    }

    /// Currently invalid fields, in rule set order
    pub fn errors(&self) -> Vec<FieldError> {
        self.rules
            .field_ids()
            .filter_map(|field| {
                self.error(field)
                    .map(|message| FieldError::new(field, message))
            })
            .collect()
    }

    /// True when no tracked field is invalid. Untouched fields do not count.
    pub fn is_valid(&self) -> bool {
        !self.states.values().any(FieldState::is_invalid)
    }

    /// Summary of the tracked state, without re-evaluating anything
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary::from_errors(self.errors())
    }

    /// Put every field back to untouched
    pub fn reset(&mut self) {
        self.states.clear();
    }
}

impl fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rules)
            .field("states", &self.states)
            .field("has_labels", &self.labels.is_some())
            .finish()
    }
}

/// Run one non-required rule against a trimmed, non-empty value
fn check_rule(rule: &Rule, value: &str, label: &str, form: &dyn FormAccessor) -> Option<String> {
    match rule {
        Rule::Required => None,
        Rule::MinLength(min) => (value.chars().count() < *min)
            .then(|| format!("{} must be at least {} characters long", label, min)),
        Rule::MaxLength(max) => (value.chars().count() > *max)
            .then(|| format!("{} must not exceed {} characters", label, max)),
        Rule::Pattern { regex, message } => (!regex.is_match(value)).then(|| {
            message
                .clone()
                .unwrap_or_else(|| format!("{} format is invalid", label))
        }),
        Rule::Custom { predicate, message } => (!predicate.check(value, form)).then(|| {
            message
                .clone()
                .unwrap_or_else(|| format!("{} is invalid", label))
        }),
    }
}
