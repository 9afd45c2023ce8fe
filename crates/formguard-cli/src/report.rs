// File: src/report.rs
// Purpose: Terminal rendering of verdicts, summaries and rule listings

use colored::Colorize;
use formguard_engine::{FieldVerdict, RuleSet, ValidationEngine, ValidationSummary};
use std::fmt::Write;

/// Summary of a submitted form, one line per failing field
pub fn render_summary(engine: &ValidationEngine, summary: &ValidationSummary) -> String {
    if summary.is_valid {
        return format!(
            "{}",
            "All fields are valid! Form is ready to submit.".green()
        );
    }

    let mut out = format!("{}", "Please fix the following errors:".red().bold());
    for error in &summary.errors {
        let _ = write!(
            out,
            "\n  - {}: {}",
            engine.label(&error.field).as_str().bold(),
            error.message
        );
    }
    out
}

/// Single field outcome
pub fn render_verdict(verdict: &FieldVerdict) -> String {
    match verdict.message() {
        None => format!("{}", "✓ Valid".green()),
        Some(message) => format!("{} {}", "✗".red(), message),
    }
}

/// Fields and their rules, in evaluation order
pub fn render_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    for (id, field_rule) in rules.iter() {
        let _ = write!(out, "{}", id.bold());
        if let Some(label) = field_rule.label_text() {
            let _ = write!(out, " ({})", label);
        }
        out.push('\n');

        if field_rule.rules().is_empty() {
            let _ = writeln!(out, "    {}", "no rules".dimmed());
        }
        for rule in field_rule.rules() {
            match rule.message() {
                Some(message) => {
                    let _ = writeln!(out, "    {} -> \"{}\"", rule, message);
                }
                None => {
                    let _ = writeln!(out, "    {}", rule);
                }
            }
        }
    }
    out
}
