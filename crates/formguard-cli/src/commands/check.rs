use anyhow::Result;
use formguard_engine::{FormValues, RuleSet, ValidationEngine};

use crate::config::OutputFormat;
use crate::report;

/// Validate every field (submit). Returns whether the form is valid.
pub fn execute(rules: RuleSet, values: &FormValues, format: OutputFormat) -> Result<bool> {
    let mut engine = ValidationEngine::new(rules);
    let summary = engine.evaluate_all(values);

    match format {
        OutputFormat::Text => println!("{}", report::render_summary(&engine, &summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary.to_json())?),
    }

    Ok(summary.is_valid)
}
