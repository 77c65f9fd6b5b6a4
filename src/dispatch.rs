// src/dispatch.rs
//! One lint run: dependency check, file-set computation, single linter call.

#![deny(missing_docs)]

use crate::assemble::{FileSetAssembler, RunMode};
use crate::changes::ChangeSource;
use crate::config::Config;
use crate::error::GateResult;
use crate::exec::Executor;
use crate::report::Reporter;
use std::ffi::OsString;
use std::path::Path;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The linter is not installed; nothing was done.
    SkippedNoDependency,
    /// No files were left to lint; the linter was not started.
    SkippedEmptySet,
    /// The linter ran once over the given number of files.
    Linted {
        /// Number of paths passed to the linter.
        files: usize,
        /// The linter's own exit code.
        exit_code: i32,
    },
}

impl Outcome {
    /// Process exit code for this outcome. Skips are successes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::SkippedNoDependency | Outcome::SkippedEmptySet => 0,
            Outcome::Linted { exit_code, .. } => *exit_code,
        }
    }
}

/// Drives a run against one project root.
pub struct Dispatcher<'a> {
    project_root: &'a Path,
    config: &'a Config,
    executor: &'a dyn Executor,
    report: Reporter,
}

impl<'a> Dispatcher<'a> {
    /// New dispatcher; `executor` runs the linter.
    pub fn new(
        project_root: &'a Path,
        config: &'a Config,
        executor: &'a dyn Executor,
        report: Reporter,
    ) -> Self {
        Self {
            project_root,
            config,
            executor,
            report,
        }
    }

    /// Lint the configured tree. `changes` is consulted only in changed-only mode.
    pub fn run(&self, mode: RunMode, changes: &dyn ChangeSource) -> GateResult<Outcome> {
        let linter = self.config.linter_path(self.project_root);
        if !linter.is_file() {
            self.report
                .info("Skipping cpplint, dependencies have not been bootstrapped");
            return Ok(Outcome::SkippedNoDependency);
        }
        self.report.debug(format!("linter: {}", linter.display()));

        let matcher = self.config.matcher();
        let exclusions = self.config.exclusions();
        self.report
            .debug(format!("extensions: {}", matcher.extensions().join(", ")));
        self.report.debug(format!(
            "{} root(s), {} excluded path(s)",
            self.config.roots.len(),
            exclusions.declared().len()
        ));
        let files = FileSetAssembler::new(self.project_root, &matcher).assemble(
            &self.config.roots,
            &exclusions,
            mode,
            changes,
        )?;

        if files.is_empty() {
            self.report.info("No C++ files to lint");
            return Ok(Outcome::SkippedEmptySet);
        }
        self.report
            .debug(format!("linting {} file(s) ({mode:?})", files.len()));
        for f in &files {
            self.report.trace(f);
        }

        let (program, mut args) = if self.config.interpreter.is_empty() {
            (linter.into_os_string(), Vec::new())
        } else {
            (
                OsString::from(&self.config.interpreter),
                vec![linter.into_os_string()],
            )
        };
        args.extend(files.iter().map(|f| OsString::from(f.as_str())));

        let exit_code = self.executor.stream(&program, &args, self.project_root)?;
        Ok(Outcome::Linted {
            files: files.len(),
            exit_code,
        })
    }
}
