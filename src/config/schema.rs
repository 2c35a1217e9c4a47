use std::path::PathBuf;

use serde::Deserialize;

/// Tool settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/igv-session/config.toml` or `~/.config/igv-session/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `IGV_SESSION__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub session: SessionSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Where the session file is written.
    pub output: PathBuf,
    /// URL prepended to the relative path of every track.
    pub prefix: String,
    /// Stylesheets with the track rules; the built-in one when empty.
    pub stylesheets: Vec<PathBuf>,
    /// Session template the tracks are added to; the built-in one when unset.
    pub template: Option<PathBuf>,
    /// Overwrite an existing output file.
    pub force: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./igv-session.json"),
            prefix: "http://localhost:8001/".to_string(),
            stylesheets: Vec::new(),
            template: None,
            force: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks while searching the sources.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: false,
            max_depth: None,
        }
    }
}
