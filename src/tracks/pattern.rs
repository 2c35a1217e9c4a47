use regex::{Regex, RegexBuilder};

use crate::error::{Result, SessionError};

/// Compile `pattern` so that it only matches at the start of a string.
pub fn prefix_regex(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| SessionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Rewrite a file type pattern so it may be preceded by anything and must
/// reach the end of the path.
pub fn filetype_pattern(pattern: &str) -> String {
    format!(".*(?:{pattern})$")
}

/// An ordered list of prefix-anchored regular expressions.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    sources: Vec<String>,
    regexes: Vec<Regex>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        Self::build(patterns, false)
    }

    pub fn case_insensitive<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        Self::build(patterns, true)
    }

    /// File type patterns, each rewritten with [`filetype_pattern`].
    pub fn filetypes<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let rewritten: Vec<String> = patterns
            .iter()
            .map(|p| filetype_pattern(p.as_ref()))
            .collect();
        Self::build(&rewritten, false)
    }

    fn build<S: AsRef<str>>(patterns: &[S], case_insensitive: bool) -> Result<Self> {
        let sources: Vec<String> = patterns.iter().map(|p| p.as_ref().to_string()).collect();
        let regexes = sources
            .iter()
            .map(|p| prefix_regex(p, case_insensitive))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sources, regexes })
    }

    /// True iff any pattern matches at the start of `candidate`.
    pub fn matches_any(&self, candidate: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(candidate))
    }

    pub fn regexes(&self) -> &[Regex] {
        &self.regexes
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }
}

/// Compile-and-match convenience for one-off checks.
pub fn matches_any<S: AsRef<str>>(candidate: &str, patterns: &[S]) -> Result<bool> {
    Ok(PatternSet::new(patterns)?.matches_any(candidate))
}
