//! Configuration loader and schema types.
//!
//! This module exposes the tool settings (output, URL prefix, stylesheets,
//! search options) and helpers to load them from disk and the environment.

mod load;
mod schema;

pub use schema::*;

use log::warn;

/// Load settings, falling back to defaults when the config is unreadable
/// or invalid.
pub fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the run.
            warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}
