//! The [`SessionError`] enum and the crate-wide [`Result`] alias.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for session building.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that abort a session build. Nothing is written when one of
/// these is returned.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two candidates produced keys of different shapes for one pattern group.
    #[error(
        "Sorting group {group} {patterns:?} produced keys that cannot be compared:\n  \
         '{first}' -> {first_value}\n  \
         '{other}' -> {other_value}\n\
         Every pattern of a group must have the same number of capture groups. \
         If a group is only meant for alternation, use a non-capturing group '(?:...)' \
         instead of '(...)'."
    )]
    SortKeyConflict {
        /// 1-based position of the group in `tracks_order`.
        group: usize,
        patterns: Vec<String>,
        first: String,
        first_value: String,
        other: String,
        other_value: String,
    },

    /// A record reached a stage without a field an earlier stage guarantees.
    #[error("Track record is missing a valid '{field}' field: {record}")]
    MissingRequiredField { field: &'static str, record: String },

    #[error("The given source is not a valid directory: {0}")]
    InvalidSource(PathBuf),

    #[error("The URL prefix must not be empty")]
    InvalidPrefix,

    #[error(
        "The output '{0}' already exists. If you want to overwrite it use the `-f` or `--force` flag"
    )]
    OutputExists(PathBuf),

    #[error("The session template must contain a 'tracks' array")]
    TemplateMissingTracks,
}
