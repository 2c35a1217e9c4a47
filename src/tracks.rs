//! Track classification and ordering.
//!
//! Turns a flat list of discovered paths into session records: index files
//! are folded into their data files, strand pairs are merged, tracks are
//! ordered by the rule set's sort groups and feature patches are applied.

mod features;
mod index;
mod model;
mod order;
mod pattern;
mod record;
mod sort_key;
mod strands;

pub use features::{FeatureRules, apply_features};
pub use index::associate;
pub use model::*;
pub use order::{OrderRules, order_tracks};
pub use pattern::{PatternSet, filetype_pattern, matches_any};
pub use record::{BASE_ORDER_VALUE, MERGED_TYPE, TrackRecord, build_records, track_record};
pub use sort_key::{KeyLevel, SortGroups, SortKey, compare_keys, sort_by_patterns};
pub use strands::{StrandGrouping, group_strands};

#[cfg(test)]
mod tests;
