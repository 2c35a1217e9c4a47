//! Session assembly: from source directories to the written session file.

mod pipeline;
mod template;

use std::path::PathBuf;

use log::info;

pub use pipeline::{build_session_tracks, classify, normalize_prefix};
pub use template::*;

use crate::config::LibrarySettings;
use crate::error::Result;
use crate::library::scan;
use crate::rules::{CompiledRules, load_rule_sets};

/// Everything a run needs, after settings and flags were merged.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub sources: Vec<PathBuf>,
    pub output: PathBuf,
    pub prefix: String,
    pub stylesheets: Vec<PathBuf>,
    pub template: Option<PathBuf>,
    pub force: bool,
    pub library: LibrarySettings,
}

/// Search the sources, build the tracks and write the session. Returns the
/// number of tracks added. Nothing is written when any step fails.
pub fn create_session(options: &SessionOptions) -> Result<usize> {
    check_output(&options.output, options.force)?;

    let rule_sets = load_rule_sets(&options.stylesheets)?
        .iter()
        .map(CompiledRules::compile)
        .collect::<Result<Vec<_>>>()?;
    let template = load_template(options.template.as_deref())?;

    let paths = scan(&options.sources, &options.library)?;
    info!("Found {} file(s) in {} source(s)", paths.len(), options.sources.len());

    let records = build_session_tracks(&paths, &rule_sets, &options.prefix)?;
    let count = records.len();

    let session = add_to_template(template, records)?;
    write_session(&options.output, &session)?;
    info!("Wrote {count} track(s) to {}", options.output.display());
    Ok(count)
}
