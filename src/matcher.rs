// src/matcher.rs
//! Extension test deciding what counts as a C/C++ source file.

#![deny(missing_docs)]

use std::path::Path;

/// Matches file names whose final extension is in a fixed set. Case-sensitive.
#[derive(Debug, Clone)]
pub struct SourceMatcher {
    extensions: Vec<String>,
}

impl Default for SourceMatcher {
    fn default() -> Self {
        Self::new(["cc", "h"])
    }
}

impl SourceMatcher {
    /// Build a matcher; a leading `.` on an extension is accepted and dropped.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// Recognized extensions, without dots.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True iff the final extension of `path` is recognized.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
