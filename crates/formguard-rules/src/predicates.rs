// File: src/predicates.rs
// Purpose: Built-in custom predicates and the name -> predicate registry used by rule files

use crate::accessor::FormAccessor;
use crate::error::RuleSetError;
use crate::patterns;
use crate::rule::Predicate;
use std::collections::HashMap;

const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Value must equal the raw value of another field (confirmation fields)
pub fn matches_field(other: impl Into<String>) -> Predicate {
    let other = other.into();
    Predicate::new(format!("matches_field:{}", other), move |value, form| {
        value == form.value_or_empty(&other)
    })
}

/// Leading integer of the value must lie in `min..=max`. Empty values pass.
pub fn int_range(min: i64, max: i64) -> Predicate {
    Predicate::from_value_fn(format!("int_range:{}..{}", min, max), move |value| {
        if value.is_empty() {
            return true;
        }
        parse_leading_int(value).map_or(false, |n| n >= min && n <= max)
    })
}

/// 7-15 digits in total, and also after a leading `+`
pub fn phone_digits() -> Predicate {
    Predicate::from_value_fn("phone_digits", is_valid_phone_digits)
}

/// Lowercase, uppercase, digit and symbol all present
pub fn strong_password() -> Predicate {
    Predicate::from_value_fn("strong_password", is_strong_password)
}

/// Usernames may be an email address; if the value has an `@` it must look like one
pub fn email_if_at() -> Predicate {
    Predicate::from_value_fn("email_if_at", |value| {
        !value.contains('@') || patterns::is_valid_email(value)
    })
}

fn count_digits(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

pub fn is_valid_phone_digits(value: &str) -> bool {
    let digits = count_digits(value);
    if !(7..=15).contains(&digits) {
        return false;
    }

    match value.strip_prefix('+') {
        Some(rest) => (7..=15).contains(&count_digits(rest)),
        None => true,
    }
}

pub fn is_strong_password(password: &str) -> bool {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    has_lower && has_upper && has_digit && has_symbol
}

/// Parse an optional sign followed by leading ASCII digits, ignoring the rest.
///
/// `"12abc"` -> 12, `"abc"` -> None.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, rest) = if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else {
        (1, s)
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Resolves predicate references in rule files.
///
/// A reference is either `name` or `name:argument`. The parameterized
/// built-ins `matches_field:<field>` and `int_range:<min>..<max>` are always
/// available; everything else is looked up by name.
#[derive(Debug, Clone)]
pub struct PredicateRegistry {
    named: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    /// Registry without any named predicates
    pub fn empty() -> Self {
        Self {
            named: HashMap::new(),
        }
    }

    /// Registry with `phone_digits`, `strong_password` and `email_if_at`
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.insert(phone_digits());
        registry.insert(strong_password());
        registry.insert(email_if_at());
        registry
    }

    /// Register a closure under `name`, replacing any previous predicate
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&str, &dyn FormAccessor) -> bool + Send + Sync + 'static,
    {
        self.insert(Predicate::new(name, func));
    }

    pub fn insert(&mut self, predicate: Predicate) {
        self.named.insert(predicate.name().to_string(), predicate);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Turn a reference from a rule file into a predicate
    pub fn resolve(&self, field: &str, reference: &str) -> Result<Predicate, RuleSetError> {
        let (name, arg) = match reference.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (reference.trim(), None),
        };

        match name {
            "matches_field" => match arg {
                Some(other) if !other.is_empty() => Ok(matches_field(other)),
                _ => Err(invalid_argument(name, "expected matches_field:<field id>")),
            },
            "int_range" => {
                let (min, max) = arg
                    .and_then(|a| a.split_once(".."))
                    .and_then(|(lo, hi)| {
                        Some((lo.trim().parse::<i64>().ok()?, hi.trim().parse::<i64>().ok()?))
                    })
                    .ok_or_else(|| invalid_argument(name, "expected int_range:<min>..<max>"))?;
                Ok(int_range(min, max))
            }
            _ => {
                let predicate =
                    self.named
                        .get(name)
                        .cloned()
                        .ok_or_else(|| RuleSetError::UnknownPredicate {
                            field: field.to_string(),
                            name: name.to_string(),
                        })?;
                if arg.is_some() {
                    return Err(invalid_argument(name, "takes no argument"));
                }
                Ok(predicate)
            }
        }
    }
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn invalid_argument(name: &str, reason: &str) -> RuleSetError {
    RuleSetError::InvalidPredicateArgument {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
