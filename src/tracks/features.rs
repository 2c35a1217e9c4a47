use indexmap::IndexMap;
use log::error;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Result, SessionError};

use super::pattern::prefix_regex;
use super::record::TrackRecord;

/// Attribute patches keyed by regular expression, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FeatureRules {
    rules: Vec<(Regex, Map<String, Value>)>,
}

impl FeatureRules {
    pub fn new(features: &IndexMap<String, Map<String, Value>>) -> Result<Self> {
        let rules = features
            .iter()
            .map(|(pattern, patch)| -> Result<_> {
                Ok((prefix_regex(pattern, false)?, patch.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn patch(&self, record: &mut TrackRecord, subject: &str) {
        for (re, patch) in &self.rules {
            if re.is_match(subject) {
                for (key, value) in patch {
                    record.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

fn missing(field: &'static str, record: &TrackRecord) -> SessionError {
    let dump = serde_json::to_string(record).unwrap_or_else(|_| format!("{:?}", record.0));
    error!("Track record without a valid '{field}': {dump}");
    SessionError::MissingRequiredField { field, record: dump }
}

fn subject(record: &TrackRecord, field: &'static str) -> Result<String> {
    record
        .get_str(field)
        .map(str::to_string)
        .ok_or_else(|| missing(field, record))
}

/// Apply every matching rule to `record`.
///
/// Merged records are matched on their `name` and their children on their
/// own `track_path`; plain records on `track_path`.
pub fn apply_features<'r>(
    record: &'r mut TrackRecord,
    rules: &FeatureRules,
) -> Result<&'r mut TrackRecord> {
    if record.is_merged() {
        let name = subject(record, "name")?;
        rules.patch(record, &name);

        let has_bad_child = match record.get("tracks") {
            Some(Value::Array(children)) => children.iter().any(|c| !c.is_object()),
            _ => false,
        };
        if has_bad_child {
            return Err(missing("tracks", record));
        }
        if let Some(Value::Array(children)) = record.0.get_mut("tracks") {
            for child in children.iter_mut() {
                let Value::Object(map) = child else {
                    continue;
                };
                let mut child_record = TrackRecord(std::mem::take(map));
                let result = apply_features(&mut child_record, rules).map(|_| ());
                *map = child_record.0;
                result?;
            }
        }
    } else {
        let path = subject(record, "track_path")?;
        rules.patch(record, &path);
    }
    Ok(record)
}
