//! Multi-level sort keys computed from groups of regular expressions.
//!
//! Each group contributes one [`KeyLevel`]: the first pattern of the group
//! that matches decides it. Patterns with capture groups sort by what they
//! captured, patterns without sort by their position in the group, and a
//! candidate no pattern matches sorts after all matched ones. Groups are
//! compared in order, so the first group is the most significant.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SessionError};

use super::pattern::PatternSet;

/// One level of a [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyLevel {
    /// Position of the matching capture-free pattern within its group.
    Index(usize),
    /// Captured substrings; `None` for groups that did not participate.
    Captures(Vec<Option<String>>),
    /// No pattern of the group matched.
    Unmatched,
}

impl PartialOrd for KeyLevel {
    /// `None` when the levels have different shapes and cannot be ordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use KeyLevel::*;
        match (self, other) {
            (Unmatched, Unmatched) => Some(Ordering::Equal),
            (Unmatched, _) => Some(Ordering::Greater),
            (_, Unmatched) => Some(Ordering::Less),
            (Index(a), Index(b)) => Some(a.cmp(b)),
            (Captures(a), Captures(b)) if a.len() == b.len() => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for KeyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyLevel::Index(i) => write!(f, "pattern #{i} (no capture groups)"),
            KeyLevel::Captures(values) => {
                let parts: Vec<String> = values
                    .iter()
                    .map(|v| match v {
                        Some(s) => format!("{s:?}"),
                        None => "<none>".to_string(),
                    })
                    .collect();
                write!(f, "{} capture(s) ({})", values.len(), parts.join(", "))
            }
            KeyLevel::Unmatched => write!(f, "no match"),
        }
    }
}

pub type SortKey = Vec<KeyLevel>;

/// Ordered pattern groups, compiled case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SortGroups {
    groups: Vec<PatternSet>,
}

impl SortGroups {
    pub fn new<S: AsRef<str>>(groups: &[Vec<S>]) -> Result<Self> {
        let groups = groups
            .iter()
            .map(|g| PatternSet::case_insensitive(g))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { groups })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Compute the key of a single candidate.
    pub fn compute_key(&self, candidate: &str) -> SortKey {
        if self.groups.is_empty() {
            return vec![KeyLevel::Captures(vec![Some(candidate.to_string())])];
        }

        self.groups
            .iter()
            .map(|group| {
                for (i, re) in group.regexes().iter().enumerate() {
                    if let Some(caps) = re.captures(candidate) {
                        if caps.len() > 1 {
                            let values = caps
                                .iter()
                                .skip(1)
                                .map(|m| m.map(|m| m.as_str().to_string()))
                                .collect();
                            return KeyLevel::Captures(values);
                        }
                        return KeyLevel::Index(i);
                    }
                }
                KeyLevel::Unmatched
            })
            .collect()
    }

    /// Compute keys for every candidate and make sure that, group by group,
    /// all of them can be compared with each other.
    pub fn sort_keys<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Vec<SortKey>> {
        let keys: Vec<SortKey> = candidates
            .iter()
            .map(|c| self.compute_key(c.as_ref()))
            .collect();
        self.check_comparable(candidates, &keys)?;
        Ok(keys)
    }

    fn check_comparable<S: AsRef<str>>(&self, candidates: &[S], keys: &[SortKey]) -> Result<()> {
        for (g, group) in self.groups.iter().enumerate() {
            // `Unmatched` compares with anything, so the reference is the
            // first candidate that matched the group.
            let Some(reference) = keys.iter().position(|k| k[g] != KeyLevel::Unmatched) else {
                continue;
            };
            for (i, key) in keys.iter().enumerate().skip(reference + 1) {
                if keys[reference][g].partial_cmp(&key[g]).is_none() {
                    return Err(SessionError::SortKeyConflict {
                        group: g + 1,
                        patterns: group.sources().to_vec(),
                        first: candidates[reference].as_ref().to_string(),
                        first_value: keys[reference][g].to_string(),
                        other: candidates[i].as_ref().to_string(),
                        other_value: key[g].to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Lexicographic comparison of two keys already checked by
/// [`SortGroups::sort_keys`].
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Sort `candidates` by their keys. Ties keep their input order.
pub fn sort_by_patterns<S: AsRef<str> + Clone>(
    candidates: &[S],
    groups: &SortGroups,
) -> Result<Vec<S>> {
    let keys = groups.sort_keys(candidates)?;
    let mut indices: Vec<usize> = (0..candidates.len()).collect();
    indices.sort_by(|&a, &b| compare_keys(&keys[a], &keys[b]));
    Ok(indices.into_iter().map(|i| candidates[i].clone()).collect())
}
