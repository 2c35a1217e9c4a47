use super::model::{DataFile, INDEX_SUFFIX};

/// Fold index files into the data file they belong to.
///
/// Paths are sorted first, so an index always directly follows its data
/// file (`a.bed.gz` < `a.bed.gz.tbi`). An index whose stem is not the
/// preceding path is kept as a data file of its own.
pub fn associate<S: AsRef<str>>(paths: &[S]) -> Vec<DataFile> {
    let mut sorted: Vec<&str> = paths.iter().map(|p| p.as_ref()).collect();
    sorted.sort_unstable();

    let mut files: Vec<DataFile> = Vec::with_capacity(sorted.len());
    let mut previous: Option<&str> = None;

    for path in sorted {
        let stem = path.strip_suffix(INDEX_SUFFIX);
        let attach = stem.is_some() && stem == previous;
        match files.last_mut() {
            Some(last) if attach && last.index.is_none() => {
                last.index = Some(path.to_string());
            }
            _ => files.push(DataFile::new(path)),
        }
        previous = Some(path);
    }

    files
}
