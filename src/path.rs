// src/path.rs
//! Root-relative file paths and sets of them.

#![deny(missing_docs)]

use crate::error::GateError;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// A file path relative to the project root, in canonical `/`-separated form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath(String);

/// Set of root-relative paths. Ordered so the linter sees a stable argument list.
pub type FileSet = BTreeSet<FilePath>;

impl FilePath {
    /// Normalize a declared or reported path (`a\b.h` on Windows, `./a/b.h`, `a//b.h`).
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let unified = if MAIN_SEPARATOR == '/' {
            raw.to_string()
        } else {
            raw.replace(MAIN_SEPARATOR, "/")
        };
        let parts: Vec<&str> = unified
            .split('/')
            .filter(|p| !p.is_empty() && *p != ".")
            .collect();
        Self(parts.join("/"))
    }

    /// Build from a path already relative to the project root.
    ///
    /// Fails with [`GateError::NonUtf8Path`] rather than altering the name.
    pub fn from_relative(path: &Path) -> Result<Self, GateError> {
        let mut parts: Vec<&str> = Vec::new();
        for c in path.components() {
            if let Component::Normal(s) = c {
                let part = s.to_str().ok_or_else(|| GateError::NonUtf8Path {
                    path: path.to_path_buf(),
                })?;
                parts.push(part);
            }
        }
        Ok(Self(parts.join("/")))
    }

    /// Build from an absolute (or root-prefixed) path; `Ok(None)` if it lies outside `root`.
    pub fn under_root(root: &Path, path: &Path) -> Result<Option<Self>, GateError> {
        match path.strip_prefix(root) {
            Ok(rel) => Self::from_relative(rel).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Native path for this entry, joined onto `root`.
    pub fn to_native(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, p| acc.join(p))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_dot_and_empty_segments() {
        assert_eq!(FilePath::new("./atom//app/a.cc").as_str(), "atom/app/a.cc");
        assert_eq!(FilePath::new("atom/app/a.cc/").as_str(), "atom/app/a.cc");
    }

    #[test]
    fn relative_and_declared_forms_agree() {
        let walked =
            FilePath::from_relative(&Path::new("atom").join("browser").join("b.h")).unwrap();
        assert_eq!(walked, FilePath::new("atom/browser/b.h"));
    }

    #[test]
    fn under_root_rejects_outside_paths() {
        let root = Path::new("/src/proj");
        assert_eq!(
            FilePath::under_root(root, Path::new("/src/proj/atom/a.cc")).unwrap(),
            Some(FilePath::new("atom/a.cc"))
        );
        assert_eq!(
            FilePath::under_root(root, Path::new("/elsewhere/a.cc")).unwrap(),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_rejected_not_rewritten() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let rel = Path::new("atom").join(OsStr::from_bytes(b"\xffbad.cc"));
        let err = FilePath::from_relative(&rel).unwrap_err();
        assert!(matches!(err, GateError::NonUtf8Path { ref path } if *path == rel));
    }
}
