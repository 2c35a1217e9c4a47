use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// File types searched for when a rule set does not list its own.
pub const BASE_FILETYPES_ALLOWED: &[&str] = &[
    r"\.bed",
    r"\.bed\.gz",
    r"\.bigWig",
    r"\.bigWig\.gz",
    r"\.gtf",
    r"\.gtf\.gz",
];

/// One set of rules read from a stylesheet.
///
/// File format: JSON, either a single rule set object or an array of them.
///
/// ```json
/// {
///   "exclude": [".*tmp/"],
///   "rna_tracks": [".*rnaseq/"],
///   "tracks_order": [[".*H3K4me3", ".*H3K27ac"], [".*bigWig"]],
///   "tracks_features": {".*\\.bed": {"color": "#003366"}}
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Paths matching any of these are ignored.
    pub exclude: Vec<String>,
    /// Only paths matching one of these are considered.
    pub include: Vec<String>,
    /// Paths of RNA-seq coverage tracks, candidates for strand pairing.
    pub rna_tracks: Vec<String>,
    /// Whether forward/reverse strands of RNA tracks are merged.
    pub overlay_rna_strands: bool,
    /// Keep reverse strands without a forward strand as single tracks
    /// instead of leaving them out.
    pub keep_unpaired_strands: bool,
    /// Accepted file endings; each may be preceded by anything and must
    /// reach the end of the path.
    pub filetypes_allowed: Vec<String>,
    /// Regex whose first capture in the file name groups tracks before
    /// `tracks_order` applies. Replicate markers (`_R1.`) are ignored.
    #[serde(alias = "group_by_regex")]
    pub group_by: Option<String>,
    /// Sort groups, most significant first.
    #[serde(alias = "set_track_order_within_group")]
    pub tracks_order: Vec<Vec<String>>,
    /// Attribute patches applied in declaration order.
    #[serde(alias = "track_features")]
    pub tracks_features: IndexMap<String, Map<String, Value>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            include: vec![".*".to_string()],
            rna_tracks: Vec::new(),
            overlay_rna_strands: true,
            keep_unpaired_strands: false,
            filetypes_allowed: BASE_FILETYPES_ALLOWED.iter().map(|s| s.to_string()).collect(),
            group_by: None,
            tracks_order: Vec::new(),
            tracks_features: IndexMap::new(),
        }
    }
}
