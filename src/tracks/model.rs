/// Suffix of tabix index files, appended to the full data file path.
pub const INDEX_SUFFIX: &str = ".tbi";

/// Extension of the wiggle files eligible for strand pairing.
pub const WIGGLE_EXTENSION: &str = ".bigWig";

pub const FORWARD: &str = "forward";
pub const REVERSE: &str = "reverse";

/// One data file and its optional index, as POSIX-style path strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub path: String,
    pub index: Option<String>,
}

impl DataFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            index: None,
        }
    }

    pub fn with_index(path: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            index: Some(index.into()),
        }
    }

    /// The final path component.
    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }
}

/// A forward/reverse strand pair displayed as one merged track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandPair {
    pub forward: DataFile,
    pub reverse: DataFile,
    /// Forward path with the strand markers removed.
    pub key: String,
}

/// A forward strand waiting for its reverse strand during pairing.
#[derive(Debug)]
pub(crate) struct PendingPair {
    pub forward: DataFile,
    pub reverse: Option<DataFile>,
    pub key: String,
}

impl PendingPair {
    pub fn open(forward: DataFile, key: String) -> Self {
        Self {
            forward,
            reverse: None,
            key,
        }
    }

    /// A pair without its reverse strand is not an overlay; it falls back
    /// to a simple track.
    pub fn finish(self) -> Track {
        match self.reverse {
            Some(reverse) => Track::Overlay(StrandPair {
                forward: self.forward,
                reverse,
                key: self.key,
            }),
            None => Track::Simple(self.forward),
        }
    }
}

/// One displayable unit of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
    Simple(DataFile),
    Overlay(StrandPair),
}

impl Track {
    /// The full path of the track, or the pair key of an overlay.
    pub fn subject(&self) -> &str {
        match self {
            Track::Simple(file) => &file.path,
            Track::Overlay(pair) => &pair.key,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, Track::Overlay(_))
    }
}

impl From<DataFile> for Track {
    fn from(file: DataFile) -> Self {
        Track::Simple(file)
    }
}

pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Remove both strand markers from `path`.
pub fn strip_strand_markers(path: &str) -> String {
    path.replace(FORWARD, "").replace(REVERSE, "")
}
