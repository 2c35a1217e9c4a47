use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SessionError};
use crate::tracks::TrackRecord;

/// Session template used when none is given.
pub const DEFAULT_SESSION_TEMPLATE: &str = include_str!("../../assets/session_template.json");

/// Read the session template at `path`, or the built-in one.
pub fn load_template(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_SESSION_TEMPLATE.to_string(),
    };
    Ok(serde_json::from_str(&text)?)
}

/// Append `records` to the template's `tracks` array.
pub fn add_to_template(mut template: Value, records: Vec<TrackRecord>) -> Result<Value> {
    let Some(Value::Array(tracks)) = template.get_mut("tracks") else {
        return Err(SessionError::TemplateMissingTracks);
    };
    tracks.extend(records.into_iter().map(TrackRecord::into_value));
    Ok(template)
}

/// Refuse to replace an existing file unless `force` is set.
pub fn check_output(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(SessionError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Write the session as pretty-printed JSON.
pub fn write_session(path: &Path, session: &Value) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut text = serde_json::to_string_pretty(session)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
