// src/error.rs
//! Error handling for cpplint-gate.

#![deny(missing_docs)]

use std::path::PathBuf;

/// GateResult is alias for anyhow
pub type GateResult<T> = anyhow::Result<T>;

/// Conditions callers may want to tell apart from plain I/O failures.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The change-set query could not run (not a repository, git missing, ...).
    #[error("version control unavailable: {reason}")]
    VersionControlUnavailable {
        /// What went wrong when querying git.
        reason: String,
    },
    /// A directory under a project root could not be walked.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walker error.
        #[source]
        source: ignore::Error,
    },
    /// A discovered file name is not valid UTF-8 and cannot be passed on unchanged.
    #[error("file name is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// Offending path, as found on disk.
        path: PathBuf,
    },
}
