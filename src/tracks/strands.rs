//! Pairing of forward/reverse strand coverage files into merged tracks.

use std::collections::BTreeMap;

use log::{debug, warn};

use super::model::{
    DataFile, FORWARD, PendingPair, REVERSE, Track, WIGGLE_EXTENSION, strip_strand_markers,
};
use super::pattern::PatternSet;

/// Result of [`group_strands`].
#[derive(Debug, Default)]
pub struct StrandGrouping {
    /// Pass-through tracks and finished pairs, sorted by subject.
    pub tracks: Vec<Track>,
    /// Reverse strands that found no forward strand to close.
    pub unpaired_reverse: Vec<DataFile>,
}

fn is_strand_candidate(file: &DataFile) -> bool {
    let name = file.file_name();
    name.ends_with(WIGGLE_EXTENSION) && (name.contains(FORWARD) || name.contains(REVERSE))
}

/// Pair the forward and reverse strand files of RNA tracks.
///
/// Only simple tracks whose path matches `rna_tracks`, whose file name ends
/// in `.bigWig` and mentions a strand take part; everything else is passed
/// through. Unpaired forward strands fall back to simple tracks. Unpaired
/// reverse strands are reported and left out unless `keep_unpaired` is set.
pub fn group_strands(
    tracks: Vec<Track>,
    rna_tracks: &PatternSet,
    keep_unpaired: bool,
) -> StrandGrouping {
    let mut grouping = StrandGrouping::default();
    let mut by_key: BTreeMap<String, Vec<DataFile>> = BTreeMap::new();

    for track in tracks {
        match track {
            Track::Simple(file)
                if rna_tracks.matches_any(&file.path) && is_strand_candidate(&file) =>
            {
                by_key
                    .entry(strip_strand_markers(&file.path))
                    .or_default()
                    .push(file);
            }
            other => grouping.tracks.push(other),
        }
    }

    for (key, mut files) in by_key {
        files.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let mut open: Option<PendingPair> = None;
        for file in files {
            if file.file_name().contains(FORWARD) {
                if let Some(unfinished) = open.take() {
                    grouping.tracks.push(unfinished.finish());
                }
                open = Some(PendingPair::open(file, key.clone()));
            } else {
                match open.take() {
                    Some(mut pending) => {
                        pending.reverse = Some(file);
                        grouping.tracks.push(pending.finish());
                    }
                    None => {
                        warn!(
                            "No forward strand found for '{}'; {}",
                            file.path,
                            if keep_unpaired {
                                "keeping it as a single track"
                            } else {
                                "it will not be displayed"
                            }
                        );
                        if keep_unpaired {
                            grouping.tracks.push(Track::Simple(file.clone()));
                        }
                        grouping.unpaired_reverse.push(file);
                    }
                }
            }
        }
        if let Some(unfinished) = open {
            debug!("No reverse strand found for '{}'", unfinished.forward.path);
            grouping.tracks.push(unfinished.finish());
        }
    }

    grouping.tracks.sort_by(|a, b| a.subject().cmp(b.subject()));
    grouping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(path: &str) -> Track {
        Track::Simple(DataFile::new(path))
    }

    fn rna() -> PatternSet {
        PatternSet::new(&["rna/"]).unwrap()
    }

    #[test]
    fn pairs_matching_strands_and_keeps_lonely_forward() {
        let tracks = vec![
            simple("rna/sampleA.forward.bigWig"),
            simple("rna/sampleA.reverse.bigWig"),
            simple("rna/sampleB.forward.bigWig"),
        ];
        let grouping = group_strands(tracks, &rna(), false);

        assert_eq!(grouping.tracks.len(), 2);
        let overlays: Vec<&Track> = grouping.tracks.iter().filter(|t| t.is_overlay()).collect();
        assert_eq!(overlays.len(), 1);
        match overlays[0] {
            Track::Overlay(pair) => {
                assert_eq!(pair.forward.path, "rna/sampleA.forward.bigWig");
                assert_eq!(pair.reverse.path, "rna/sampleA.reverse.bigWig");
                assert_eq!(pair.key, "rna/sampleA..bigWig");
            }
            Track::Simple(_) => unreachable!(),
        }
        assert!(grouping.tracks.contains(&simple("rna/sampleB.forward.bigWig")));
        assert!(grouping.unpaired_reverse.is_empty());
    }

    #[test]
    fn lonely_reverse_is_dropped_and_reported() {
        let tracks = vec![simple("rna/x_reverse.bigWig"), simple("rna/y.bigWig")];
        let grouping = group_strands(tracks, &rna(), false);

        assert_eq!(grouping.tracks, vec![simple("rna/y.bigWig")]);
        assert_eq!(grouping.unpaired_reverse, vec![DataFile::new("rna/x_reverse.bigWig")]);
    }

    #[test]
    fn lonely_reverse_can_be_kept() {
        let tracks = vec![simple("rna/x_reverse.bigWig")];
        let grouping = group_strands(tracks, &rna(), true);

        assert_eq!(grouping.tracks, vec![simple("rna/x_reverse.bigWig")]);
        assert_eq!(grouping.unpaired_reverse.len(), 1);
    }

    #[test]
    fn only_rna_wiggle_files_with_strand_names_are_paired() {
        let tracks = vec![
            simple("chip/a.forward.bigWig"),
            simple("chip/a.reverse.bigWig"),
            simple("rna/b.forward.bed"),
            simple("rna/b.reverse.bed"),
        ];
        let grouping = group_strands(tracks.clone(), &rna(), false);

        assert!(grouping.tracks.iter().all(|t| !t.is_overlay()));
        assert_eq!(grouping.tracks.len(), tracks.len());
    }

    #[test]
    fn strands_in_different_directories_do_not_pair() {
        let tracks = vec![
            simple("rna/run1/s.forward.bigWig"),
            simple("rna/run2/s.reverse.bigWig"),
        ];
        let grouping = group_strands(tracks, &rna(), false);

        assert_eq!(grouping.tracks, vec![simple("rna/run1/s.forward.bigWig")]);
        assert_eq!(grouping.unpaired_reverse.len(), 1);
    }

    #[test]
    fn indexed_strands_keep_their_indexes() {
        let tracks = vec![
            Track::Simple(DataFile::with_index("rna/s.forward.bigWig", "rna/s.forward.bigWig.tbi")),
            simple("rna/s.reverse.bigWig"),
        ];
        let grouping = group_strands(tracks, &rna(), false);

        match &grouping.tracks[0] {
            Track::Overlay(pair) => {
                assert_eq!(pair.forward.index.as_deref(), Some("rna/s.forward.bigWig.tbi"));
                assert_eq!(pair.reverse.index, None);
            }
            Track::Simple(_) => panic!("expected an overlay"),
        }
    }
}
