//! Ready-made rule sets for common forms.
//!
//! - [`login`]: username-or-email plus password
//! - [`registration`]: the full sign-up form (names, email, phone, password
//!   with confirmation, optional age and website)

use crate::patterns;
use crate::predicates;
use crate::rule::FieldRule;
use crate::rule_set::RuleSet;

/// Names accepted by [`by_name`]
pub const PRESET_NAMES: &[&str] = &["login", "registration"];

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<RuleSet> {
    match name {
        "login" => Some(login()),
        "registration" => Some(registration()),
        _ => None,
    }
}

pub fn login() -> RuleSet {
    RuleSet::builder()
        .field(
            "username",
            FieldRule::new()
                .label("Username or email")
                .required()
                .min_length(3)
                .custom_with_message(
                    predicates::email_if_at(),
                    "Please enter a valid email address",
                ),
        )
        .field(
            "password",
            FieldRule::new().label("Password").required().min_length(6),
        )
        .build()
}

pub fn registration() -> RuleSet {
    RuleSet::builder()
        .field(
            "firstName",
            FieldRule::new()
                .label("First Name")
                .required()
                .min_length(2)
                .max_length(50)
                .pattern_with_message(
                    patterns::person_name(),
                    "First name can only contain letters and spaces",
                ),
        )
        .field(
            "lastName",
            FieldRule::new()
                .label("Last Name")
                .required()
                .min_length(2)
                .max_length(50)
                .pattern_with_message(
                    patterns::person_name(),
                    "Last name can only contain letters and spaces",
                ),
        )
        .field(
            "email",
            FieldRule::new()
                .label("Email")
                .required()
                .pattern_with_message(patterns::email(), "Please enter a valid email address"),
        )
        .field(
            "phone",
            FieldRule::new()
                .label("Phone")
                .required()
                .pattern_with_message(
                    patterns::phone(),
                    "Please enter a valid phone number (7-15 digits, can include +, -, (, ), spaces)",
                )
                .custom_with_message(
                    predicates::phone_digits(),
                    "Phone number must contain 7-15 digits",
                ),
        )
        .field(
            "password",
            FieldRule::new()
                .label("Password")
                .required()
                .min_length(8)
                .custom_with_message(
                    predicates::strong_password(),
                    "Password must contain lowercase, uppercase, number, and special character",
                ),
        )
        .field(
            "confirmPassword",
            FieldRule::new()
                .label("Confirm Password")
                .required()
                .custom_with_message(
                    predicates::matches_field("password"),
                    "Passwords do not match",
                ),
        )
        .field(
            "age",
            FieldRule::new().label("Age").custom_with_message(
                predicates::int_range(13, 123),
                "Age must be between 13 and 123",
            ),
        )
        .field(
            "website",
            FieldRule::new()
                .label("Website")
                .pattern_with_message(patterns::url(), "Please enter a valid URL"),
        )
        .build()
}
