use log::{debug, warn};

use crate::error::{Result, SessionError};
use crate::rules::CompiledRules;
use crate::tracks::{
    BASE_ORDER_VALUE, INDEX_SUFFIX, Track, TrackRecord, apply_features, associate, build_records,
    group_strands, order_tracks,
};

/// Make sure the URL prefix is usable as a directory URL.
pub fn normalize_prefix(prefix: &str) -> Result<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(SessionError::InvalidPrefix);
    }
    if prefix.ends_with('/') {
        Ok(prefix.to_string())
    } else {
        Ok(format!("{prefix}/"))
    }
}

/// Classify and order the paths one rule set claimed.
pub fn classify(paths: &[&str], rules: &CompiledRules) -> Result<Vec<Track>> {
    let candidates: Vec<&str> = paths
        .iter()
        .copied()
        .filter(|p| rules.allows_filetype(p))
        .collect();

    let mut files = associate(&candidates);
    files.retain(|file| {
        let keep = rules.filetypes.matches_any(&file.path);
        if !keep && file.path.ends_with(INDEX_SUFFIX) {
            warn!("Index '{}' has no data file, skipping it", file.path);
        }
        keep
    });
    debug!("{} data file(s) after index association", files.len());

    let mut tracks: Vec<Track> = files.into_iter().map(Track::from).collect();
    if rules.overlay_rna_strands && !rules.rna_tracks.is_empty() {
        let grouping = group_strands(tracks, &rules.rna_tracks, rules.keep_unpaired_strands);
        if !grouping.unpaired_reverse.is_empty() {
            warn!(
                "{} reverse strand file(s) without a forward strand",
                grouping.unpaired_reverse.len()
            );
        }
        tracks = grouping.tracks;
    }

    order_tracks(tracks, &rules.order)
}

/// Turn discovered paths into ordered, feature-patched session records.
///
/// Rule sets are applied in order; each one takes the paths it includes and
/// does not exclude among those no earlier rule set took.
pub fn build_session_tracks<S: AsRef<str>>(
    paths: &[S],
    rule_sets: &[CompiledRules],
    prefix: &str,
) -> Result<Vec<TrackRecord>> {
    let prefix = normalize_prefix(prefix)?;
    let paths: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
    let mut claimed = vec![false; paths.len()];
    let mut records: Vec<TrackRecord> = Vec::new();

    for (n, rules) in rule_sets.iter().enumerate() {
        let mut mine: Vec<&str> = Vec::new();
        for (path, taken) in paths.iter().zip(claimed.iter_mut()) {
            if !*taken && rules.claims(path) {
                *taken = true;
                mine.push(*path);
            }
        }

        let tracks = classify(&mine, rules)?;
        let first_order = BASE_ORDER_VALUE + records.len() as u64;
        let mut built = build_records(&tracks, &prefix, first_order);
        if !rules.features.is_empty() {
            for record in built.iter_mut() {
                apply_features(record, &rules.features)?;
            }
        }
        debug!("Rule set {} produced {} track(s)", n + 1, built.len());
        records.extend(built);
    }

    Ok(records)
}
