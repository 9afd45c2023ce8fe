use anyhow::Result;
use formguard_engine::RuleSet;

use crate::config::OutputFormat;
use crate::report;

pub fn execute(rules: &RuleSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report::render_rules(rules)),
        OutputFormat::Json => {
            let fields: Vec<serde_json::Value> = rules
                .iter()
                .map(|(id, field_rule)| {
                    serde_json::json!({
                        "id": id,
                        "label": rules.label_for(id),
                        "required": field_rule.is_required(),
                        "rules": field_rule.rules().iter().map(|rule| {
                            serde_json::json!({
                                "kind": rule.kind(),
                                "rule": rule.to_string(),
                                "message": rule.message(),
                            })
                        }).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
    }

    Ok(())
}
