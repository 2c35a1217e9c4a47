//! Build IGV sessions from directories of genome track files.
//!
//! Discovered paths are classified into tracks (index files attached,
//! RNA strands merged), put in order by regex sort groups and styled by
//! feature rules before being added to a session template.

pub mod config;
pub mod error;
pub mod library;
pub mod rules;
pub mod session;
pub mod tracks;

pub mod prelude {
    pub use crate::error::{Result, SessionError};
    pub use crate::rules::{CompiledRules, RuleSet};
    pub use crate::session::{SessionOptions, create_session};
    pub use crate::tracks::{DataFile, StrandPair, Track, TrackRecord};
}
