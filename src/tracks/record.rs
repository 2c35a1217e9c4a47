use serde::Serialize;
use serde_json::{Map, Value, json};

use super::model::{DataFile, StrandPair, Track, file_name};

/// `order` given to the first track of a session.
pub const BASE_ORDER_VALUE: u64 = 10;

pub const MERGED_TYPE: &str = "merged";

/// Default attributes of a file type.
struct BaseFeatures {
    suffix: &'static str,
    format: &'static str,
    kind: &'static str,
    height: Option<u64>,
}

static BASE_TRACK_FEATURES: &[BaseFeatures] = &[
    BaseFeatures {
        suffix: ".bed",
        format: "bed",
        kind: "annotation",
        height: Some(25),
    },
    BaseFeatures {
        suffix: ".bed.gz",
        format: "bed",
        kind: "annotation",
        height: Some(25),
    },
    BaseFeatures {
        suffix: ".bigWig",
        format: "bigWig",
        kind: "wig",
        height: None,
    },
    BaseFeatures {
        suffix: ".bigWig.gz",
        format: "bigWig",
        kind: "wig",
        height: None,
    },
    BaseFeatures {
        suffix: ".gtf",
        format: "gtf",
        kind: "annotation",
        height: None,
    },
    BaseFeatures {
        suffix: ".gtf.gz",
        format: "gtf",
        kind: "annotation",
        height: None,
    },
];

/// The attributes of one session track, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrackRecord(pub Map<String, Value>);

impl TrackRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_merged(&self) -> bool {
        self.get_str("type") == Some(MERGED_TYPE)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for TrackRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn file_record(file: &DataFile, prefix: &str) -> TrackRecord {
    let mut record = TrackRecord::default();
    record.insert("name", json!(file.file_name()));
    record.insert("url", json!(format!("{prefix}{}", file.path)));
    if let Some(index) = &file.index {
        record.insert("indexUrl", json!(format!("{prefix}{index}")));
    }
    record.insert("track_path", json!(file.path));

    for base in BASE_TRACK_FEATURES.iter().filter(|b| file.path.ends_with(b.suffix)) {
        record.insert("format", json!(base.format));
        record.insert("type", json!(base.kind));
        if let Some(height) = base.height {
            record.insert("height", json!(height));
        }
    }
    record
}

/// Collapse separators left doubled by removing the strand markers.
fn tidy_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let is_sep = matches!(c, '.' | '_' | '-');
        if is_sep && out.ends_with(c) {
            continue;
        }
        if c == '.' && (out.ends_with('_') || out.ends_with('-')) {
            out.pop();
        }
        out.push(c);
    }
    out.trim_matches(|c| matches!(c, '.' | '_' | '-')).to_string()
}

fn pair_record(pair: &StrandPair, prefix: &str) -> TrackRecord {
    let mut record = TrackRecord::default();
    record.insert("name", json!(tidy_name(file_name(&pair.key))));
    record.insert("type", json!(MERGED_TYPE));
    record.insert("url", json!(format!("{prefix}{}", pair.forward.path)));
    record.insert("track_path", json!(pair.key));
    record.insert(
        "tracks",
        Value::Array(vec![
            file_record(&pair.forward, prefix).into_value(),
            file_record(&pair.reverse, prefix).into_value(),
        ]),
    );
    record
}

/// Build the session record of a single track, without an order.
pub fn track_record(track: &Track, prefix: &str) -> TrackRecord {
    match track {
        Track::Simple(file) => file_record(file, prefix),
        Track::Overlay(pair) => pair_record(pair, prefix),
    }
}

/// Build records for tracks already in display order, numbering them from
/// `first_order`.
pub fn build_records(tracks: &[Track], prefix: &str, first_order: u64) -> Vec<TrackRecord> {
    tracks
        .iter()
        .zip(first_order..)
        .map(|(track, order)| {
            let mut record = track_record(track, prefix);
            record.insert("order", json!(order));
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tidy_name_collapses_separators() {
        assert_eq!(tidy_name("sampleA..bigWig"), "sampleA.bigWig");
        assert_eq!(tidy_name("sampleA_.bigWig"), "sampleA.bigWig");
        assert_eq!(tidy_name("sampleA__x.bigWig"), "sampleA_x.bigWig");
        assert_eq!(tidy_name("_strand.bigWig"), "strand.bigWig");
    }

    #[test]
    fn bed_records_get_annotation_defaults() {
        let record = track_record(&Track::Simple(DataFile::new("d/a.bed.gz")), "http://h/");
        assert_eq!(record.get_str("format"), Some("bed"));
        assert_eq!(record.get_str("type"), Some("annotation"));
        assert_eq!(record.get("height"), Some(&json!(25)));
        assert_eq!(record.get_str("url"), Some("http://h/d/a.bed.gz"));
        assert_eq!(record.get_str("name"), Some("a.bed.gz"));
        assert_eq!(record.get("indexUrl"), None);
    }

    #[test]
    fn index_becomes_index_url() {
        let file = DataFile::with_index("a.bed.gz", "a.bed.gz.tbi");
        let record = track_record(&Track::Simple(file), "p/");
        assert_eq!(record.get_str("indexUrl"), Some("p/a.bed.gz.tbi"));
    }

    #[test]
    fn pairs_become_merged_records_with_two_children() {
        let pair = StrandPair {
            forward: DataFile::new("r/s.forward.bigWig"),
            reverse: DataFile::new("r/s.reverse.bigWig"),
            key: "r/s..bigWig".to_string(),
        };
        let record = track_record(&Track::Overlay(pair), "p/");
        assert!(record.is_merged());
        assert_eq!(record.get_str("name"), Some("s.bigWig"));
        assert_eq!(record.get_str("url"), Some("p/r/s.forward.bigWig"));
        let children = record.get("tracks").and_then(Value::as_array).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["track_path"], json!("r/s.forward.bigWig"));
        assert_eq!(children[1]["type"], json!("wig"));
        assert!(children[0].get("order").is_none());
    }

    #[test]
    fn orders_count_up_from_the_first() {
        let tracks = vec![
            Track::Simple(DataFile::new("a.bed")),
            Track::Simple(DataFile::new("b.bed")),
        ];
        let records = build_records(&tracks, "p/", BASE_ORDER_VALUE);
        assert_eq!(records[0].get("order"), Some(&json!(10)));
        assert_eq!(records[1].get("order"), Some(&json!(11)));
    }
}
