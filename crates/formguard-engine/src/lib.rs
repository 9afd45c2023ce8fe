//! # formguard-engine
//!
//! Evaluates a [`RuleSet`] against field values and tracks the resulting state
//! of every field.
//!
//! ## Quick Start
//!
//! ```rust
//! use formguard_engine::{presets, FormValues, ValidationEngine};
//!
//! let mut engine = ValidationEngine::new(presets::registration());
//! let form = FormValues::new()
//!     .with("password", "Abc123!@")
//!     .with("confirmPassword", "Abc123!#");
//!
//! // Field-level event (e.g. blur)
//! let verdict = engine.evaluate_field("confirmPassword", "Abc123!#", &form);
//! assert_eq!(verdict.message(), Some("Passwords do not match"));
//!
//! // The user starts typing again: hide the error
//! engine.clear_field("confirmPassword");
//!
//! // Submit-time check of the whole form
//! let summary = engine.evaluate_all(&form);
//! assert!(!summary.is_valid);
//! ```
//!
//! Validation failures are data: nothing here returns `Err` or panics because a
//! value is invalid.

pub mod engine;
pub mod summary;
pub mod verdict;

pub use engine::ValidationEngine;
pub use summary::{FieldError, ValidationSummary};
pub use verdict::{FieldState, FieldVerdict};

// Rules are part of the engine's public surface
pub use formguard_rules::{
    normalize_label, patterns, predicates, presets, FieldRule, FormAccessor, FormValues,
    LabelLookup, Predicate, PredicateRegistry, Rule, RuleSet, RuleSetBuilder, RuleSetError,
};
