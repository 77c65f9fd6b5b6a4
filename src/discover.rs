// src/discover.rs
//! Recursive discovery of candidate source files under project roots.

#![deny(missing_docs)]

use crate::error::{GateError, GateResult};
use crate::matcher::SourceMatcher;
use crate::path::{FilePath, FileSet};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A top-level directory and the sub-directories beneath it to scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRoot {
    /// Directory relative to the project root, e.g. `atom`.
    pub root: String,
    /// Sub-directories of `root` to walk, e.g. `["app", "browser"]`.
    pub directories: Vec<String>,
}

impl ProjectRoot {
    /// Convenience constructor.
    pub fn new<I, S>(root: impl Into<String>, directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            directories: directories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Recursive file discovery.
pub struct Discover();

impl Discover {
    /// Walk every sub-directory of `root`, collecting files `matcher` accepts.
    ///
    /// Paths come back relative to `project_root`. A sub-directory that does not
    /// exist contributes nothing; any other walk error aborts.
    pub fn discover(
        project_root: &Path,
        root: &ProjectRoot,
        matcher: &SourceMatcher,
    ) -> GateResult<FileSet> {
        let mut found = FileSet::new();
        let base = FilePath::new(&root.root).to_native(project_root);

        for directory in &root.directories {
            let dir = FilePath::new(directory).to_native(&base);
            if !dir.is_dir() {
                continue;
            }
            Self::walk_into(project_root, &dir, matcher, &mut found)?;
        }

        Ok(found)
    }

    fn walk_into(
        project_root: &Path,
        dir: &Path,
        matcher: &SourceMatcher,
        out: &mut FileSet,
    ) -> GateResult<()> {
        let mut builder = WalkBuilder::new(dir);

        // Plain recursive listing: no hidden-file or ignore-file filtering.
        builder
            .standard_filters(false)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_exclude(false)
            .git_global(false)
            .parents(false)
            .follow_links(false)
            .max_depth(None);

        for res in builder.build() {
            let dent = res.map_err(|source| GateError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;

            let Some(ft) = dent.file_type() else {
                continue;
            };
            // Symlinked files count, symlinked directories are not entered.
            let is_file = ft.is_file() || (ft.is_symlink() && dent.path().is_file());
            if !is_file || !matcher.matches(dent.path()) {
                continue;
            }

            if let Some(rel) = FilePath::under_root(project_root, dent.path())? {
                out.insert(rel);
            }
        }

        Ok(())
    }
}
