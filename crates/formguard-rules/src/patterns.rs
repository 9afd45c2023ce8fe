// File: src/patterns.rs
// Purpose: Built-in regular expressions for common form fields

use once_cell::sync::Lazy;
use regex::Regex;

// Anything@anything.anything, no whitespace
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PERSON_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

// Optional leading +, then 7-20 ASCII digits, spaces, dashes or parentheses
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()-]{7,20}$").unwrap());

// Word boundary after the TLD is ASCII-only, so "é" counts as a non-word char
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}(?-u:\b)([-a-zA-Z0-9()@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

pub fn email() -> Regex {
    EMAIL_REGEX.clone()
}

/// Letters and spaces only
pub fn person_name() -> Regex {
    PERSON_NAME_REGEX.clone()
}

pub fn phone() -> Regex {
    PHONE_REGEX.clone()
}

/// http(s) URL somewhere in the value
pub fn url() -> Regex {
    URL_REGEX.clone()
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
