// src/report.rs
//! User-facing status lines.

#![deny(missing_docs)]

use colored::Colorize;
use std::fmt::Display;

/// Prints notices according to the `-v`/`-q` flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: u8,
    quiet: bool,
}

impl Reporter {
    /// `quiet` overrides any verbosity.
    pub fn new(verbosity: u8, quiet: bool) -> Self {
        Self { verbosity, quiet }
    }

    /// A reporter that prints nothing.
    pub fn silent() -> Self {
        Self::new(0, true)
    }

    /// Effective verbosity level (0 when quiet).
    pub fn level(&self) -> u8 {
        if self.quiet { 0 } else { self.verbosity }
    }

    /// `[INFO]` line on stdout, shown unless quiet.
    pub fn info(&self, msg: impl Display) {
        if !self.quiet {
            println!("{} {}", "[INFO]".cyan(), msg);
        }
    }

    /// `[DEBUG]` line on stderr, shown at `-vv` and above.
    pub fn debug(&self, msg: impl Display) {
        if self.level() > 1 {
            eprintln!("{} {}", "[DEBUG]".dimmed(), msg);
        }
    }

    /// Like [`Reporter::debug`], but only at `-vvv`.
    pub fn trace(&self, msg: impl Display) {
        if self.level() > 2 {
            eprintln!("{} {}", "[TRACE]".dimmed(), msg);
        }
    }
}
