use regex::Regex;

use crate::error::{Result, SessionError};

use super::model::{Track, file_name};
use super::sort_key::{KeyLevel, SortGroups, compare_keys};

const REPLICATE_MARKER: &str = r"_R\d+\.";

/// How a list of tracks is put into display order.
#[derive(Debug, Clone, Default)]
pub struct OrderRules {
    /// Optional grouping regex; its first capture in the file name forms the
    /// most significant level.
    group_by: Option<Regex>,
    replicate: Option<Regex>,
    groups: SortGroups,
}

impl OrderRules {
    pub fn new(group_by: Option<&str>, tracks_order: &[Vec<String>]) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| SessionError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        };
        let (group_by, replicate) = match group_by {
            Some(pattern) => (Some(compile(pattern)?), Some(compile(REPLICATE_MARKER)?)),
            None => (None, None),
        };
        Ok(Self {
            group_by,
            replicate,
            groups: SortGroups::new(tracks_order)?,
        })
    }

    /// The grouping level of a file name, replicates of one sample sharing it.
    fn group_level(&self, name: &str) -> Option<KeyLevel> {
        let group_by = self.group_by.as_ref()?;
        let name = match &self.replicate {
            Some(re) => re.replace_all(name, "."),
            None => name.into(),
        };
        let group = group_by
            .captures(&name)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some(KeyLevel::Captures(vec![Some(group)]))
    }
}

/// Sort tracks into their display order.
///
/// Rules are evaluated against the file name of each track (the pair key's
/// file name for overlays). Tracks with equal keys are ordered by full path.
pub fn order_tracks(tracks: Vec<Track>, rules: &OrderRules) -> Result<Vec<Track>> {
    let paths: Vec<&str> = tracks.iter().map(Track::subject).collect();
    let names: Vec<&str> = paths.iter().map(|path| file_name(path)).collect();
    let mut keys = rules.groups.sort_keys(&names)?;
    for (key, name) in keys.iter_mut().zip(&names) {
        if let Some(level) = rules.group_level(name) {
            key.insert(0, level);
        }
    }

    let mut order: Vec<usize> = (0..tracks.len()).collect();
    order.sort_by(|&a, &b| {
        compare_keys(&keys[a], &keys[b]).then_with(|| paths[a].cmp(paths[b]))
    });

    let mut slots: Vec<Option<Track>> = tracks.into_iter().map(Some).collect();
    Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
}
