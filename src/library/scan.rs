use std::path::{Component, Path};

use log::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Result, SessionError};

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Render `path` with `/` separators and without a leading `./`.
pub fn posix_path(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| match c {
            Component::RootDir => String::new(),
            other => other.as_os_str().to_string_lossy().into_owned(),
        })
        .collect();
    if parts.len() == 1 && parts[0].is_empty() {
        return "/".to_string();
    }
    parts.join("/")
}

/// Collect the files under every source directory.
///
/// Paths keep the form the sources were given in (relative sources give
/// relative paths) and use `/` as separator.
pub fn scan<P: AsRef<Path>>(sources: &[P], settings: &LibrarySettings) -> Result<Vec<String>> {
    let mut paths: Vec<String> = Vec::new();

    for source in sources {
        let source = source.as_ref();
        if !source.is_dir() {
            return Err(SessionError::InvalidSource(source.to_path_buf()));
        }

        let mut walker = WalkDir::new(source).follow_links(settings.follow_links);
        if let Some(d) = settings.max_depth {
            walker = walker.max_depth(d);
        }

        let before = paths.len();
        for entry in walker
            .into_iter()
            .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Skipping unreadable entry: {err}");
                    None
                }
            })
        {
            if entry.file_type().is_file() {
                paths.push(posix_path(entry.path()));
            }
        }
        debug!("Found {} file(s) under {}", paths.len() - before, source.display());
    }

    Ok(paths)
}
