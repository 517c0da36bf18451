use derive_setters::Setters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::slug::sortify;

/// Largest number of arbitrary characters tolerated between two query words
pub const DEFAULT_MAX_GAP: usize = 20;

/// Configurable defaults for search pattern construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
pub struct SearchOptions {
    pub max_gap: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_gap: DEFAULT_MAX_GAP }
    }
}

impl SearchOptions {
    pub fn builder(&self) -> SearchPatternBuilder {
        SearchPatternBuilder::default().max_gap(self.max_gap)
    }
}

/// Compiles free-text queries into [`SearchPattern`]s.
///
/// The query is sortified and every space between its words becomes a
/// wildcard matching up to `max_gap` arbitrary characters, so "foo bar" still
/// finds "foo, the bar". The gap is bounded to keep matching cost
/// proportional to the candidate length.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct SearchPatternBuilder {
    /// Anchor the pattern to the start of the candidate text
    prefix: bool,
    max_gap: usize,
}

impl Default for SearchPatternBuilder {
    fn default() -> Self {
        Self { prefix: false, max_gap: DEFAULT_MAX_GAP }
    }
}

impl SearchPatternBuilder {
    pub fn build(&self, query: &str) -> Result<SearchPattern> {
        let normalized = sortify(query);
        let gap = format!(".{{0,{}}}", self.max_gap);

        let mut source = String::new();
        if self.prefix {
            source.push('^');
        }
        if !normalized.is_empty() {
            let words = normalized.split(' ').map(regex::escape).collect::<Vec<_>>();
            source.push_str(&words.join(&gap));
        }

        let regex = Regex::new(&source)?;
        debug!(query = %normalized, pattern = %source, "Compiled search pattern");

        Ok(SearchPattern { query: normalized, regex })
    }
}

/// A compiled, reusable matcher for sortified text.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    query: String,
    regex: Regex,
}

impl SearchPattern {
    /// The sortified query the pattern was built from.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Matches against text that is already in sortified form, such as a
    /// stored sort key.
    pub fn is_match(&self, sortified: &str) -> bool {
        self.regex.is_match(sortified)
    }

    /// Sortifies `text` before matching.
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_match(&sortify(text))
    }
}

/// Builds a bounded-gap pattern for `query`, optionally anchored to the start
/// of the candidate.
pub fn searchify(query: &str, prefix: bool) -> Result<SearchPattern> {
    SearchPatternBuilder::default().prefix(prefix).build(query)
}
