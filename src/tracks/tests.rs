use super::*;
use crate::error::SessionError;

fn groups(spec: &[&[&str]]) -> SortGroups {
    let owned: Vec<Vec<String>> = spec
        .iter()
        .map(|g| g.iter().map(|p| p.to_string()).collect())
        .collect();
    SortGroups::new(&owned).unwrap()
}

fn simple(path: &str) -> Track {
    Track::Simple(DataFile::new(path))
}

#[test]
fn compute_key_uses_pattern_index_or_unmatched() {
    let g = groups(&[&[".*abc.*", ".*def.*"], &[".*txt"]]);
    assert_eq!(
        g.compute_key("abc.txt"),
        vec![KeyLevel::Index(0), KeyLevel::Index(0)]
    );
    assert_eq!(
        g.compute_key("def.txt"),
        vec![KeyLevel::Index(1), KeyLevel::Index(0)]
    );
    assert_eq!(
        g.compute_key("abc.gz"),
        vec![KeyLevel::Index(0), KeyLevel::Unmatched]
    );
}

#[test]
fn sorting_follows_groups_like_a_tree() {
    let g = groups(&[&[".*abc.*", ".*def.*"], &[".*txt"]]);
    let sorted = sort_by_patterns(&["abc.txt", "def.txt", "abc.gz"], &g).unwrap();
    assert_eq!(sorted, vec!["abc.txt", "abc.gz", "def.txt"]);
}

#[test]
fn compute_key_is_case_insensitive_and_prefix_anchored() {
    let g = groups(&[&["sample"]]);
    assert_eq!(g.compute_key("SAMPLE_1.bed"), vec![KeyLevel::Index(0)]);
    assert_eq!(g.compute_key("x_sample.bed"), vec![KeyLevel::Unmatched]);
}

#[test]
fn captures_sort_by_their_values() {
    let g = groups(&[&[r".*_(rep\d)\."]]);
    let sorted = sort_by_patterns(&["a_rep2.bed", "b_rep1.bed", "c.bed"], &g).unwrap();
    assert_eq!(sorted, vec!["b_rep1.bed", "a_rep2.bed", "c.bed"]);
}

#[test]
fn optional_capture_that_did_not_participate_is_none() {
    let g = groups(&[&[r"(a)?(b)"]]);
    assert_eq!(
        g.compute_key("b"),
        vec![KeyLevel::Captures(vec![None, Some("b".to_string())])]
    );
}

#[test]
fn empty_groups_sort_lexicographically() {
    let g = SortGroups::default();
    assert_eq!(
        g.compute_key("x/y.bed"),
        vec![KeyLevel::Captures(vec![Some("x/y.bed".to_string())])]
    );
    let input = vec!["b.bed", "a/z.bed", "a.bed", "B.bed"];
    let mut expected = input.clone();
    expected.sort();
    assert_eq!(sort_by_patterns(&input, &g).unwrap(), expected);
}

#[test]
fn uniform_arity_never_conflicts() {
    let g = groups(&[
        &[r"(\w+)_(\d)\.bed", r"(\w+)-(\d)\.bed"],
        &[".*chip", ".*rna", ".*atac"],
    ]);
    let candidates = ["x_1.bed", "y-2.bed", "zzz", "w_3.bed.chip"];
    let keys = g.sort_keys(&candidates).unwrap();
    // Total order: every pair compares one way or the other.
    for a in &keys {
        for b in &keys {
            assert_eq!(compare_keys(a, b), compare_keys(b, a).reverse());
        }
    }
}

#[test]
fn mixed_arity_in_one_group_is_a_conflict() {
    let g = groups(&[&[".*bed"], &[r"(.*)\.forward", r".*\.reverse"]]);
    let err = g
        .sort_keys(&["s.forward", "s.reverse", "other"])
        .unwrap_err();
    match err {
        SessionError::SortKeyConflict {
            group,
            first,
            other,
            ..
        } => {
            assert_eq!(group, 2);
            assert_eq!(first, "s.forward");
            assert_eq!(other, "s.reverse");
        }
        e => panic!("unexpected error: {e}"),
    }
}

#[test]
fn different_capture_counts_conflict_and_suggest_non_capturing_groups() {
    let g = groups(&[&[r"(a)(b)", r"(c)"]]);
    let err = sort_by_patterns(&["ab", "c"], &g).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("(?:...)"));
    assert!(msg.contains("group 1"));
}

#[test]
fn unmatched_candidates_never_conflict() {
    let g = groups(&[&[r"(\d+)"]]);
    let sorted = sort_by_patterns(&["x", "10", "2"], &g).unwrap();
    assert_eq!(sorted, vec!["10", "2", "x"]);
}

#[test]
fn equal_keys_fall_back_to_the_full_path() {
    let rules = OrderRules::new(None, &[vec!["a".to_string()]]).unwrap();
    let tracks = vec![simple("chip/b.bed"), simple("rna/a.bed"), simple("chip/a.bed")];
    let ordered = order_tracks(tracks, &rules).unwrap();
    assert_eq!(
        ordered,
        vec![simple("chip/a.bed"), simple("rna/a.bed"), simple("chip/b.bed")]
    );
}

#[test]
fn order_rules_match_the_file_name_not_the_directory() {
    let marks = vec!["H3K4me3".to_string(), "H3K27ac".to_string()];
    let rules = OrderRules::new(None, &[marks]).unwrap();
    let tracks = vec![
        simple("data/H3K27ac_s1.bed"),
        simple("data/H3K4me3_s1.bed"),
        simple("data/b_x.bed"),
        simple("data/a_x.bigWig"),
    ];
    let ordered = order_tracks(tracks, &rules).unwrap();
    assert_eq!(
        ordered,
        vec![
            simple("data/H3K4me3_s1.bed"),
            simple("data/H3K27ac_s1.bed"),
            simple("data/a_x.bigWig"),
            simple("data/b_x.bed"),
        ]
    );
}

#[test]
fn order_tracks_uses_pair_key_for_overlays() {
    let rules = OrderRules::new(None, &[]).unwrap();
    let pair = Track::Overlay(StrandPair {
        forward: DataFile::new("b.forward.bigWig"),
        reverse: DataFile::new("b.reverse.bigWig"),
        key: "b..bigWig".to_string(),
    });
    let ordered =
        order_tracks(vec![simple("c.bed"), pair.clone(), simple("a.bed")], &rules).unwrap();
    assert_eq!(ordered, vec![simple("a.bed"), pair, simple("c.bed")]);
}

#[test]
fn group_by_keeps_replicates_together() {
    let rules = OrderRules::new(
        Some(r"^([^.]*).*$"),
        &[vec![".*bigWig".to_string(), ".*bed".to_string()]],
    )
    .unwrap();
    let tracks = vec![
        simple("d/s1_R1.bed"),
        simple("d/s2.bigWig"),
        simple("d/s1_R2.bigWig"),
        simple("d/s2.bed"),
    ];
    let ordered = order_tracks(tracks, &rules).unwrap();
    assert_eq!(
        ordered,
        vec![
            simple("d/s1_R2.bigWig"),
            simple("d/s1_R1.bed"),
            simple("d/s2.bigWig"),
            simple("d/s2.bed"),
        ]
    );
}

#[test]
fn order_tracks_reports_conflicts_before_sorting() {
    let rules = OrderRules::new(None, &[vec!["(a)".to_string(), "b".to_string()]]).unwrap();
    let err = order_tracks(vec![simple("a"), simple("b")], &rules).unwrap_err();
    assert!(matches!(err, SessionError::SortKeyConflict { .. }));
}

#[test]
fn pipeline_pairs_then_orders() {
    let files = associate(&[
        "rna/s.reverse.bigWig",
        "rna/s.forward.bigWig",
        "anno/genes.bed.gz",
        "anno/genes.bed.gz.tbi",
    ]);
    let tracks: Vec<Track> = files.into_iter().map(Track::from).collect();
    let grouping = group_strands(tracks, &PatternSet::new(&["rna/"]).unwrap(), false);
    let rules = OrderRules::new(None, &[vec![".*bigWig".to_string()]]).unwrap();
    let ordered = order_tracks(grouping.tracks, &rules).unwrap();

    assert_eq!(ordered.len(), 2);
    assert!(ordered[0].is_overlay());
    assert_eq!(
        ordered[1],
        Track::Simple(DataFile::with_index("anno/genes.bed.gz", "anno/genes.bed.gz.tbi"))
    );
}
