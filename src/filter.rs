//! # Changed-Path Filtering
//!
//! Filters the raw changed-path listing before folder extraction. Patterns
//! are plain substrings, comma-separated in the configuration surface:
//!
//! - `include` mode keeps a path iff it contains at least one pattern.
//! - `exclude` mode keeps a path iff it contains none of the patterns.
//!
//! Matching is literal substring containment, not glob or regex. This is a
//! compatibility guarantee: existing pipeline configurations rely on it, so
//! a pattern like `"foo"` matches `"foobar/baz.txt"`. Short patterns
//! over-match for the same reason (`"db"` matches both `"db2/x"` and
//! `"adb/y"`); that behavior is inherited and preserved.

/// Whether patterns select or reject matching paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Include,
    Exclude,
}

/// A substring pattern filter over changed paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFilter {
    mode: FilterMode,
    patterns: Vec<String>,
}

impl PatternFilter {
    /// Build a filter from a comma-separated pattern list.
    ///
    /// Empty fragments produced by stray commas are dropped, so `"a,,b"`
    /// yields the patterns `["a", "b"]`. An input with no usable fragments
    /// yields a filter with no patterns; in include mode that filter keeps
    /// nothing, in exclude mode it keeps everything.
    pub fn from_comma_list(mode: FilterMode, spec: &str) -> Self {
        let patterns = spec
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Self { mode, patterns }
    }

    /// Apply the filter to a path sequence, preserving input order.
    pub fn apply<'a>(&self, paths: &'a [String]) -> Vec<&'a str> {
        paths
            .iter()
            .map(String::as_str)
            .filter(|path| self.keeps(path))
            .collect()
    }

    /// Whether a single path survives the filter.
    pub fn keeps(&self, path: &str) -> bool {
        let matched = self.patterns.iter().any(|p| path.contains(p.as_str()));
        match self.mode {
            FilterMode::Include => matched,
            FilterMode::Exclude => !matched,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
