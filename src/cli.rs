// src/cli.rs
//! CLI argument parser for cpplint-gate.

#![deny(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Run cpplint over the project's C++ files.
#[derive(Parser, Debug)]
#[command(
    name = "cpplint-gate",
    version,
    about = "Run cpplint on the project's C++ files",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Only lint files changed in the working tree.
    #[arg(short = 'c', long = "only-changed")]
    pub only_changed: bool,

    /// Show cpplint output; repeat for more detail (-vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all output (overrides -v).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project root directory (defaults to pwd).
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/.cpplint-gate.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Optional subcommand; without one, lint.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands supported by the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file into the project root.
    Init {
        /// Overwrite existing configuration if present.
        #[arg(long)]
        force: bool,
    },
}
