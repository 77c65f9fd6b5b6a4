// src/assemble.rs
//! Set algebra producing the final list of files to lint.

#![deny(missing_docs)]

use crate::changes::ChangeSource;
use crate::discover::{Discover, ProjectRoot};
use crate::error::GateResult;
use crate::exclusions::Exclusions;
use crate::matcher::SourceMatcher;
use crate::path::FileSet;
use std::path::Path;

/// Whether to restrict the run to files changed in the working tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Lint every discovered file.
    #[default]
    Full,
    /// Lint only discovered files that git reports as changed.
    ChangedOnly,
}

impl RunMode {
    /// `--only-changed` flag to mode.
    pub fn from_flag(only_changed: bool) -> Self {
        if only_changed {
            RunMode::ChangedOnly
        } else {
            RunMode::Full
        }
    }
}

/// Composes discovery, exclusion and change filtering.
pub struct FileSetAssembler<'a> {
    project_root: &'a Path,
    matcher: &'a SourceMatcher,
}

impl<'a> FileSetAssembler<'a> {
    /// Assembler for files under `project_root` accepted by `matcher`.
    pub fn new(project_root: &'a Path, matcher: &'a SourceMatcher) -> Self {
        Self {
            project_root,
            matcher,
        }
    }

    /// Union of discovery over `roots`, minus `exclusions`, intersected with
    /// the change set when `mode` is [`RunMode::ChangedOnly`].
    ///
    /// `changes` is only queried in changed-only mode.
    pub fn assemble(
        &self,
        roots: &[ProjectRoot],
        exclusions: &Exclusions,
        mode: RunMode,
        changes: &dyn ChangeSource,
    ) -> GateResult<FileSet> {
        let mut candidates = FileSet::new();
        for root in roots {
            candidates.extend(Discover::discover(self.project_root, root, self.matcher)?);
        }

        let excluded = exclusions.to_set();
        candidates.retain(|f| !excluded.contains(f));

        if mode == RunMode::ChangedOnly {
            let changed = changes.changed_files()?;
            candidates.retain(|f| changed.contains(f));
        }

        Ok(candidates)
    }
}
