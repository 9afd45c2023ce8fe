//! Integration tests for formguard-engine
//!
//! Tests are organized by feature area and cover:
//! - Required / optional short-circuit
//! - Length bounds
//! - Pattern and custom rules (including cross-field rules)
//! - Field state lifecycle (evaluate / clear / re-evaluate)
//! - Whole-form evaluation and error ordering

use formguard_engine::*;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::{fixture, rstest};

fn email_rules() -> RuleSet {
    RuleSet::builder()
        .field(
            "email",
            FieldRule::new()
                .label("Email")
                .required()
                .pattern_with_message(patterns::email(), "Please enter a valid email address"),
        )
        .build()
}

#[fixture]
fn form_engine() -> ValidationEngine {
    ValidationEngine::new(
        RuleSet::builder()
            .field("name", FieldRule::new().label("Name").required().min_length(2))
            .field(
                "password",
                FieldRule::new().label("Password").required().min_length(8),
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
            .build(),
    )
}

// ---------------------------------------------------------------------------
// Required / optional
// ---------------------------------------------------------------------------

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\n  ")]
fn test_required_empty_fails_with_required_message(#[case] input: &str) {
    let rules = RuleSet::builder()
        .field(
            "code",
            FieldRule::new()
                .label("Code")
                .required()
                .min_length(4)
                .pattern(Regex::new("^[0-9]+$").unwrap())
                .custom(Predicate::from_value_fn("never", |_| false)),
        )
        .build();
    let mut engine = ValidationEngine::new(rules);

    let verdict = engine.evaluate_field("code", input, &FormValues::new());
    assert_eq!(verdict, FieldVerdict::invalid("Code is required"));
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_optional_empty_skips_every_other_rule(#[case] input: &str) {
    let rules = RuleSet::builder()
        .field(
            "code",
            FieldRule::new()
                .min_length(4)
                .pattern(Regex::new("^[0-9]+$").unwrap())
                .custom(Predicate::from_value_fn("never", |_| false)),
        )
        .build();
    let mut engine = ValidationEngine::new(rules);

    assert_eq!(
        engine.evaluate_field("code", input, &FormValues::new()),
        FieldVerdict::valid()
    );
    assert_eq!(engine.state("code"), FieldState::Valid);
}

// ---------------------------------------------------------------------------
// Length bounds
// ---------------------------------------------------------------------------

#[rstest]
#[case("a", false)]
#[case("ab", true)]
#[case("abc", true)]
fn test_min_length_boundary(mut form_engine: ValidationEngine, #[case] input: &str, #[case] ok: bool) {
    let verdict = form_engine.evaluate_field("name", input, &FormValues::new());
    assert_eq!(verdict.is_ok(), ok);
    if !ok {
        assert_eq!(verdict.message(), Some("Name must be at least 2 characters long"));
    }
}

#[test]
fn test_min_length_checked_before_max_length_and_pattern() {
    let rules = RuleSet::builder()
        .field(
            "pin",
            FieldRule::new()
                .label("PIN")
                .pattern(Regex::new("^[0-9]+$").unwrap())
                .max_length(6)
                .min_length(4),
        )
        .build();
    let engine = ValidationEngine::new(rules);
    let form = FormValues::new();

    assert_eq!(
        engine.check_field("pin", "ab", &form).message(),
        Some("PIN must be at least 4 characters long")
    );
    assert_eq!(
        engine.check_field("pin", "abcdefg", &form).message(),
        Some("PIN must not exceed 6 characters")
    );
    assert_eq!(
        engine.check_field("pin", "abcd", &form).message(),
        Some("PIN format is invalid")
    );
    assert!(engine.check_field("pin", "1234", &form).is_ok());
}

// ---------------------------------------------------------------------------
// Pattern and custom rules
// ---------------------------------------------------------------------------

#[rstest]
#[case("not-an-email", Some("Please enter a valid email address"))]
#[case("", Some("Email is required"))]
#[case("a@b.co", None)]
fn test_email_scenario(#[case] input: &str, #[case] expected: Option<&str>) {
    let mut engine = ValidationEngine::new(email_rules());
    let verdict = engine.evaluate_field("email", input, &FormValues::new());

    assert_eq!(verdict.is_ok(), expected.is_none());
    assert_eq!(verdict.message(), expected);
}

#[rstest]
#[case("", None)]
#[case("12", Some("Age must be between 13 and 123"))]
#[case("13", None)]
#[case("123", None)]
#[case("124", Some("Age must be between 13 and 123"))]
fn test_age_scenario(
    mut form_engine: ValidationEngine,
    #[case] input: &str,
    #[case] expected: Option<&str>,
) {
    let verdict = form_engine.evaluate_field("age", input, &FormValues::new());
    assert_eq!(verdict.message(), expected);
}

#[rstest]
#[case("Abc123!@", None)]
#[case("Abc123!#", Some("Passwords do not match"))]
fn test_confirm_password_reads_other_field(
    mut form_engine: ValidationEngine,
    #[case] confirm: &str,
    #[case] expected: Option<&str>,
) {
    let form = FormValues::new()
        .with("password", "Abc123!@")
        .with("confirmPassword", confirm);

    let verdict = form_engine.evaluate_field("confirmPassword", confirm, &form);
    assert_eq!(verdict.message(), expected);
}

#[test]
fn test_default_messages_when_none_configured() {
    let rules = RuleSet::builder()
        .field(
            "zip",
            FieldRule::new()
                .label("ZIP")
                .pattern(Regex::new(r"^\d{5}$").unwrap()),
        )
        .field(
            "coupon",
            FieldRule::new().custom(Predicate::from_value_fn("known", |v| v == "SAVE10")),
        )
        .build();
    let engine = ValidationEngine::new(rules);
    let form = FormValues::new();

    assert_eq!(
        engine.check_field("zip", "1234", &form).message(),
        Some("ZIP format is invalid")
    );
    assert_eq!(
        engine.check_field("coupon", "FREE", &form).message(),
        Some("coupon is invalid")
    );
}

#[test]
fn test_custom_predicate_sees_trimmed_value() {
    let rules = RuleSet::builder()
        .field(
            "exact",
            FieldRule::new().custom(Predicate::from_value_fn("exact", |v| v == "yes")),
        )
        .build();
    let engine = ValidationEngine::new(rules);
    assert!(engine.check_field("exact", "  yes  ", &FormValues::new()).is_ok());
}

// ---------------------------------------------------------------------------
// Field state lifecycle
// ---------------------------------------------------------------------------

#[rstest]
fn test_state_transitions(mut form_engine: ValidationEngine) {
    let form = FormValues::new();
    assert_eq!(form_engine.state("name"), FieldState::Untouched);

    form_engine.evaluate_field("name", "a", &form);
    assert_eq!(
        form_engine.state("name"),
        FieldState::Invalid("Name must be at least 2 characters long".to_string())
    );
    assert_eq!(
        form_engine.error("name"),
        Some("Name must be at least 2 characters long")
    );

    form_engine.evaluate_field("name", "Al", &form);
    assert_eq!(form_engine.state("name"), FieldState::Valid);
    assert_eq!(form_engine.error("name"), None);

    form_engine.evaluate_field("name", "", &form);
    assert_eq!(form_engine.error("name"), Some("Name is required"));

    form_engine.clear_field("name");
    assert_eq!(form_engine.state("name"), FieldState::Untouched);
    assert_eq!(form_engine.error("name"), None);
}

#[rstest]
fn test_latest_failure_replaces_previous_message(mut form_engine: ValidationEngine) {
    let form = FormValues::new();
    form_engine.evaluate_field("name", "", &form);
    form_engine.evaluate_field("name", "a", &form);

    assert_eq!(
        form_engine.errors(),
        vec![FieldError::new("name", "Name must be at least 2 characters long")]
    );
}

#[rstest]
#[case("")]
#[case("a")]
#[case("Alice")]
fn test_clear_field_resets_any_state(mut form_engine: ValidationEngine, #[case] input: &str) {
    form_engine.evaluate_field("name", input, &FormValues::new());
    form_engine.on_field_clear("name");

    assert_eq!(form_engine.state("name"), FieldState::Untouched);
    assert!(form_engine.errors().is_empty());
}

#[rstest]
fn test_clear_untouched_field_is_noop(mut form_engine: ValidationEngine) {
    form_engine.clear_field("name");
    assert_eq!(form_engine.state("name"), FieldState::Untouched);
}

#[rstest]
#[case("")]
#[case("a")]
#[case("Alice")]
fn test_evaluate_is_idempotent(mut form_engine: ValidationEngine, #[case] input: &str) {
    let form = FormValues::new();

    let first = form_engine.on_field_evaluate("name", input, &form);
    let first_state = form_engine.state("name");
    let first_errors = form_engine.errors();

    let second = form_engine.on_field_evaluate("name", input, &form);

    assert_eq!(first, second);
    assert_eq!(first_state, form_engine.state("name"));
    assert_eq!(first_errors, form_engine.errors());
}

#[rstest]
fn test_engines_are_independent(form_engine: ValidationEngine) {
    let rules = form_engine.rules().clone();
    let mut first = form_engine;
    let mut second = ValidationEngine::new(rules);

    first.evaluate_field("name", "", &FormValues::new());

    assert!(first.error("name").is_some());
    assert_eq!(second.state("name"), FieldState::Untouched);
    assert!(second.evaluate_field("name", "Bob", &FormValues::new()).is_ok());
}

// ---------------------------------------------------------------------------
// Whole-form evaluation
// ---------------------------------------------------------------------------

#[rstest]
fn test_evaluate_all_valid(mut form_engine: ValidationEngine) {
    let form = FormValues::new()
        .with("name", "Alice")
        .with("password", "Abc123!@")
        .with("confirmPassword", "Abc123!@");

    let summary = form_engine.evaluate_all(&form);

    assert_eq!(summary, ValidationSummary::from_errors(Vec::new()));
    assert!(summary.is_valid);
    assert_eq!(form_engine.state("age"), FieldState::Valid);
}

#[rstest]
fn test_evaluate_all_errors_in_rule_set_order(mut form_engine: ValidationEngine) {
    // Missing "name" counts as empty
    let form = FormValues::new()
        .with("age", "9")
        .with("password", "short")
        .with("confirmPassword", "different");

    let summary = form_engine.evaluate_all(&form);

    assert!(!summary.is_valid);
    assert_eq!(
        summary.errors,
        vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("password", "Password must be at least 8 characters long"),
            FieldError::new("confirmPassword", "Passwords do not match"),
            FieldError::new("age", "Age must be between 13 and 123"),
        ]
    );
    // The stored error map is the source of the summary
    assert_eq!(form_engine.errors(), summary.errors);
}

#[rstest]
fn test_evaluate_all_ignores_previous_touch_state(mut form_engine: ValidationEngine) {
    let form = FormValues::new().with("name", "Alice");
    form_engine.evaluate_field("name", "", &form);
    form_engine.clear_field("password");

    let summary = form_engine.evaluate_all(&form);

    assert!(!summary.has_error("name"));
    assert_eq!(summary.get_error("password"), Some("Password is required"));
}

#[rstest]
fn test_is_valid_only_counts_tracked_fields(mut form_engine: ValidationEngine) {
    assert!(form_engine.is_valid());
    form_engine.evaluate_field("name", "Alice", &FormValues::new());
    assert!(form_engine.is_valid());
    form_engine.evaluate_field("password", "x", &FormValues::new());
    assert!(!form_engine.is_valid());
}
