// File: src/rule.rs
// Purpose: Typed rule descriptors and the per-field rule contract

use crate::accessor::FormAccessor;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

type PredicateFn = Arc<dyn Fn(&str, &dyn FormAccessor) -> bool + Send + Sync>;

/// A named check over a field value and the rest of the form.
///
/// Predicates must be total over strings. The engine does not catch panics
/// raised from inside a predicate.
#[derive(Clone)]
pub struct Predicate {
    name: String,
    func: PredicateFn,
}

impl Predicate {
    /// Wrap a closure as a named predicate
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str, &dyn FormAccessor) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Predicate that only looks at the value itself
    pub fn from_value_fn<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value, _form| func(value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the predicate against a (trimmed) value
    pub fn check(&self, value: &str, form: &dyn FormAccessor) -> bool {
        (self.func)(value, form)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One constraint attached to a field
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must not be empty after trimming
    Required,
    /// At least N characters
    MinLength(usize),
    /// At most N characters
    MaxLength(usize),
    /// Value must match the regex (unanchored unless the pattern anchors itself)
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
    /// Caller-supplied predicate, may read other fields
    Custom {
        predicate: Predicate,
        message: Option<String>,
    },
}

impl Rule {
    /// Evaluation rank. Lower ranks are checked first.
    pub fn precedence(&self) -> u8 {
        match self {
            Rule::Required => 0,
            Rule::MinLength(_) => 1,
            Rule::MaxLength(_) => 2,
            Rule::Pattern { .. } => 3,
            Rule::Custom { .. } => 4,
        }
    }

    /// Short machine-readable name of the rule kind
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::MinLength(_) => "min_length",
            Rule::MaxLength(_) => "max_length",
            Rule::Pattern { .. } => "pattern",
            Rule::Custom { .. } => "custom",
        }
    }

    /// Configured failure message, if the rule carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            Rule::Pattern { message, .. } | Rule::Custom { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::MinLength(n) => write!(f, "min_length({})", n),
            Rule::MaxLength(n) => write!(f, "max_length({})", n),
            Rule::Pattern { regex, .. } => write!(f, "pattern(/{}/)", regex.as_str()),
            Rule::Custom { predicate, .. } => write!(f, "custom({})", predicate.name()),
        }
    }
}

/// Validation contract for one field: optional label plus its rules.
///
/// Rules are kept sorted by [`Rule::precedence`], so the order in which the
/// builder methods are called does not change evaluation order. Rules of the
/// same kind keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    label: Option<String>,
    rules: Vec<Rule>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the human-facing label used in generated messages
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(self) -> Self {
        self.with_rule(Rule::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.with_rule(Rule::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.with_rule(Rule::MaxLength(max))
    }

    /// Pattern rule using the generated "format is invalid" message
    pub fn pattern(self, regex: Regex) -> Self {
        self.with_rule(Rule::Pattern {
            regex,
            message: None,
        })
    }

    pub fn pattern_with_message(self, regex: Regex, message: impl Into<String>) -> Self {
        self.with_rule(Rule::Pattern {
            regex,
            message: Some(message.into()),
        })
    }

    /// Custom rule using the generated "is invalid" message
    pub fn custom(self, predicate: Predicate) -> Self {
        self.with_rule(Rule::Custom {
            predicate,
            message: None,
        })
    }

    pub fn custom_with_message(self, predicate: Predicate, message: impl Into<String>) -> Self {
        self.with_rule(Rule::Custom {
            predicate,
            message: Some(message.into()),
        })
    }

    /// Insert a rule at its precedence slot
    pub fn with_rule(mut self, rule: Rule) -> Self {
        if matches!(rule, Rule::Required) && self.is_required() {
            return self;
        }
        let rank = rule.precedence();
        let at = self
            .rules
            .iter()
            .position(|existing| existing.precedence() > rank)
            .unwrap_or(self.rules.len());
        self.rules.insert(at, rule);
        self
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    /// All rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules that apply to a non-empty value, in evaluation order
    pub fn checks(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| !matches!(r, Rule::Required))
    }
}
