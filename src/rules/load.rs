use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::Result;

use super::schema::RuleSet;

/// Stylesheet used when none is given.
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/stylesheet.json");

/// Parse a stylesheet holding a rule set object or an array of them.
pub fn parse_stylesheet(text: &str) -> Result<Vec<RuleSet>> {
    let value: Value = serde_json::from_str(text)?;
    let sets: Vec<RuleSet> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(sets)
}

/// Read and parse the stylesheet at `path`.
pub fn load_stylesheet(path: &Path) -> Result<Vec<RuleSet>> {
    let text = fs::read_to_string(path)?;
    let sets = parse_stylesheet(&text)?;
    debug!("Loaded {} rule set(s) from {}", sets.len(), path.display());
    Ok(sets)
}

/// Rule sets of all `paths` in order, or the built-in stylesheet when
/// `paths` is empty.
pub fn load_rule_sets<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RuleSet>> {
    if paths.is_empty() {
        return parse_stylesheet(DEFAULT_STYLESHEET);
    }
    let mut sets = Vec::new();
    for path in paths {
        sets.extend(load_stylesheet(path.as_ref())?);
    }
    Ok(sets)
}
