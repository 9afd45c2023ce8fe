// File: src/values.rs
// Purpose: Form values from TOML/JSON files and `--set id=value` flags

use anyhow::{bail, Context, Result};
use formguard_engine::FormValues;
use std::fs;
use std::path::Path;

/// Load a flat table of string values. `.json` files are read as JSON,
/// anything else as TOML.
pub fn load_values(path: &Path) -> Result<FormValues> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {:?}", path))?;

    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let values = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON values file: {:?}", path))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML values file: {:?}", path))?
    };

    Ok(values)
}

/// Parse `id=value`. The value may be empty or contain further `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => bail!("Invalid value assignment '{}': expected id=value", raw),
    }
}

/// Values from an optional file, overridden by `--set` assignments
pub fn collect_values(file: Option<&Path>, assignments: &[String]) -> Result<FormValues> {
    let mut values = match file {
        Some(path) => load_values(path)?,
        None => FormValues::new(),
    };

    for raw in assignments {
        let (field, value) = parse_assignment(raw)?;
        values.set(field, value);
    }

    Ok(values)
}
