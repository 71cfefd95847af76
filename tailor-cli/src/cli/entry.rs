//! Manual measurement entry: `--measure field=value` flags and YAML
//! measurement files.
//!
//! ```yaml
//! length_of_pants: 1.0
//! crotch_line: 0.4
//! thigh_scope: 0.6
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tailor::{DraftError, ManualEntry};

/// Build a manual entry from an optional YAML file plus `field=value`
/// assignments. Assignments override file values.
pub fn collect(file: Option<&Path>, assignments: &[String]) -> Result<ManualEntry> {
    let mut entry = match file {
        Some(path) => load_file(path)?,
        None => ManualEntry::new(),
    };
    entry.assign_all(assignments)?;
    Ok(entry)
}

fn load_file(path: &Path) -> Result<ManualEntry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read measurements file {}", path.display()))?;
    from_yaml(&content).with_context(|| format!("in measurements file {}", path.display()))
}

/// Parse a YAML map of field to number (or numeric string).
pub fn from_yaml(content: &str) -> Result<ManualEntry> {
    let map: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(content)?;
    let mut entry = ManualEntry::new();
    for (field, value) in map {
        let text = match value {
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::String(s) => s,
            other => {
                return Err(DraftError::invalid(field, format!("expected a number, got {:?}", other)).into());
            }
        };
        entry.insert(field, text);
    }
    Ok(entry)
}
