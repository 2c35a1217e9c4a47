//! Discovery of candidate track files under the source directories.

mod scan;

pub use scan::{posix_path, scan};
