use anyhow::{bail, Result};
use formguard_engine::{FormValues, RuleSet, ValidationEngine};

use crate::config::OutputFormat;
use crate::report;

/// Validate a single field (blur). Returns whether the field is valid.
///
/// `values` supplies the other fields for cross-field rules; `value` is used
/// for the field itself regardless of what `values` holds for it.
pub fn execute(
    rules: RuleSet,
    id: &str,
    value: &str,
    values: &FormValues,
    format: OutputFormat,
) -> Result<bool> {
    if !rules.contains(id) {
        let known: Vec<&str> = rules.field_ids().collect();
        bail!("Unknown field '{}'. Known fields: {}", id, known.join(", "));
    }

    let mut form = values.clone();
    form.set(id, value);

    let mut engine = ValidationEngine::new(rules);
    let verdict = engine.on_field_evaluate(id, value, &form);

    match format {
        OutputFormat::Text => println!(
            "{}: {}",
            engine.label(id),
            report::render_verdict(&verdict)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&verdict)?),
    }

    Ok(verdict.ok)
}
