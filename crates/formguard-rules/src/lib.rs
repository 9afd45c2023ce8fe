//! # formguard-rules
//!
//! Declarative validation rules for form fields.
//!
//! A [`RuleSet`] maps field identifiers to a [`FieldRule`]: an optional label and
//! a list of typed [`Rule`]s (required, length bounds, pattern, custom predicate).
//! Rule sets are built in code, loaded from TOML rule files, or taken from the
//! ready-made [`presets`].
//!
//! ```rust
//! use formguard_rules::{patterns, FieldRule, RuleSet};
//!
//! let rules = RuleSet::builder()
//!     .field(
//!         "email",
//!         FieldRule::new()
//!             .label("Email")
//!             .required()
//!             .pattern_with_message(patterns::email(), "Please enter a valid email address"),
//!     )
//!     .build();
//!
//! assert!(rules.get("email").unwrap().is_required());
//! assert_eq!(rules.label_for("email"), "Email");
//! ```
//!
//! Evaluation lives in `formguard-engine`; this crate is pure data plus lookup.

pub mod accessor;
pub mod error;
pub mod loader;
pub mod patterns;
pub mod predicates;
pub mod presets;
pub mod rule;
pub mod rule_set;

pub use accessor::{normalize_label, FormAccessor, FormValues, LabelLookup};
pub use error::RuleSetError;
pub use loader::{FieldSpec, RuleFile};
pub use predicates::PredicateRegistry;
pub use rule::{FieldRule, Predicate, Rule};
pub use rule_set::{RuleSet, RuleSetBuilder};
