// src/changes.rs
//! Files modified in the working tree, as reported by git.

#![deny(missing_docs)]

use crate::error::{GateError, GateResult};
use crate::exec::Executor;
use crate::path::{FilePath, FileSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Source of the changed-file set used by changed-only runs.
pub trait ChangeSource {
    /// Root-relative paths differing from the checked-out baseline.
    fn changed_files(&self) -> GateResult<FileSet>;
}

/// Queries `git diff --name-only` (unstaged and staged) in the project root.
pub struct GitChanges<'a> {
    project_root: PathBuf,
    program: OsString,
    executor: &'a dyn Executor,
}

impl<'a> GitChanges<'a> {
    /// Use the `git` found on `PATH`.
    pub fn new(project_root: &Path, executor: &'a dyn Executor) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            program: OsString::from("git"),
            executor,
        }
    }

    /// Use a different git binary.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn diff(&self, cached: bool) -> GateResult<String> {
        let mut args: Vec<OsString> = ["-c", "core.quotePath=false", "diff", "--name-only", "-z"]
            .into_iter()
            .map(OsString::from)
            .collect();
        // Paths relative to the project root, not the repository top level.
        args.push("--relative".into());
        if cached {
            args.push("--cached".into());
        }
        self.executor
            .capture(&self.program, &args, &self.project_root)
            .map_err(|e| {
                anyhow::Error::from(GateError::VersionControlUnavailable {
                    reason: format!("{e:#}"),
                })
            })
    }

    /// Parse NUL-separated `--name-only -z` output into a set.
    pub fn parse(output: &str) -> FileSet {
        output
            .split('\0')
            .filter(|l| !l.is_empty())
            .map(FilePath::new)
            .collect()
    }
}

impl ChangeSource for GitChanges<'_> {
    fn changed_files(&self) -> GateResult<FileSet> {
        let mut files = Self::parse(&self.diff(false)?);
        files.extend(Self::parse(&self.diff(true)?));
        Ok(files)
    }
}
