// src/exec.rs
//! Running external commands: captured (for queries) or pass-through (for the linter).

#![deny(missing_docs)]

use crate::error::GateResult;
use anyhow::{Context, bail};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// How external commands are run. Implemented by [`SystemExecutor`] and by test doubles.
pub trait Executor {
    /// Run to completion and return stdout. A non-zero exit is an error.
    fn capture(&self, program: &OsStr, args: &[OsString], cwd: &Path) -> GateResult<String>;

    /// Run to completion and return the exit code. A non-zero exit is not an error.
    fn stream(&self, program: &OsStr, args: &[OsString], cwd: &Path) -> GateResult<i32>;
}

/// Executes real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor {
    verbose: bool,
}

impl SystemExecutor {
    /// With `verbose`, streamed commands write straight to the terminal.
    /// Otherwise their output is held back and only shown if they fail.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    #[inline]
    fn display(program: &OsStr, args: &[OsString]) -> String {
        let mut s = program.to_string_lossy().into_owned();
        for a in args {
            s.push(' ');
            s.push_str(&a.to_string_lossy());
        }
        s
    }

    fn code(status: ExitStatus) -> i32 {
        match status.code() {
            Some(code) => code,
            None => Self::signal_code(status),
        }
    }

    #[cfg(unix)]
    fn signal_code(status: ExitStatus) -> i32 {
        use std::os::unix::process::ExitStatusExt;
        status.signal().map_or(1, |sig| 128 + sig)
    }

    #[cfg(not(unix))]
    fn signal_code(_status: ExitStatus) -> i32 {
        1
    }
}

impl Executor for SystemExecutor {
    fn capture(&self, program: &OsStr, args: &[OsString], cwd: &Path) -> GateResult<String> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .with_context(|| format!("running {}", Self::display(program, args)))?;
        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                Self::display(program, args),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn stream(&self, program: &OsStr, args: &[OsString], cwd: &Path) -> GateResult<i32> {
        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);

        if self.verbose {
            let status = command
                .status()
                .with_context(|| format!("running {}", Self::display(program, args)))?;
            return Ok(Self::code(status));
        }

        let output = command
            .output()
            .with_context(|| format!("running {}", Self::display(program, args)))?;
        if !output.status.success() {
            std::io::stdout()
                .write_all(&output.stdout)
                .context("replaying linter stdout")?;
            std::io::stderr()
                .write_all(&output.stderr)
                .context("replaying linter stderr")?;
        }
        Ok(Self::code(output.status))
    }
}
