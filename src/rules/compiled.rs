use crate::error::Result;
use crate::tracks::{FeatureRules, INDEX_SUFFIX, OrderRules, PatternSet};

use super::schema::RuleSet;

/// A [`RuleSet`] with every regular expression compiled.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    pub exclude: PatternSet,
    pub include: PatternSet,
    pub rna_tracks: PatternSet,
    pub filetypes: PatternSet,
    pub overlay_rna_strands: bool,
    pub keep_unpaired_strands: bool,
    pub order: OrderRules,
    pub features: FeatureRules,
}

impl CompiledRules {
    pub fn compile(rules: &RuleSet) -> Result<Self> {
        Ok(Self {
            exclude: PatternSet::new(&rules.exclude)?,
            include: PatternSet::new(&rules.include)?,
            rna_tracks: PatternSet::new(&rules.rna_tracks)?,
            filetypes: PatternSet::filetypes(&rules.filetypes_allowed)?,
            overlay_rna_strands: rules.overlay_rna_strands,
            keep_unpaired_strands: rules.keep_unpaired_strands,
            order: OrderRules::new(rules.group_by.as_deref(), &rules.tracks_order)?,
            features: FeatureRules::new(&rules.tracks_features)?,
        })
    }

    /// Whether this rule set takes `path`: included and not excluded.
    pub fn claims(&self, path: &str) -> bool {
        self.include.matches_any(path) && !self.exclude.matches_any(path)
    }

    /// Whether `path`, or the data file an index belongs to, has an
    /// accepted file type.
    pub fn allows_filetype(&self, path: &str) -> bool {
        let data_path = path.strip_suffix(INDEX_SUFFIX).unwrap_or(path);
        self.filetypes.matches_any(data_path)
    }
}
