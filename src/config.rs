// src/config.rs
//! Configuration file for cpplint-gate

#![deny(missing_docs)]

use crate::discover::ProjectRoot;
use crate::error::GateResult;
use crate::exclusions::{DEFAULT_EXCLUDES, Exclusions};
use crate::matcher::SourceMatcher;
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE: &str = ".cpplint-gate.toml";

/// Config struct for cpplint-gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Linter script or binary, relative to the project root.
    pub linter: PathBuf,
    /// Program used to run `linter`; empty runs the linter directly.
    pub interpreter: String,
    /// Source file extensions, without dots.
    pub extensions: Vec<String>,
    /// Root-relative paths never linted.
    pub exclude: Vec<String>,
    /// Directories to scan.
    pub roots: Vec<ProjectRoot>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linter: PathBuf::from("vendor/depot_tools/cpplint.py"),
            interpreter: "python3".into(),
            extensions: vec!["cc".into(), "h".into()],
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            roots: vec![
                ProjectRoot::new(
                    "atom",
                    ["app", "browser", "common", "renderer", "utility"],
                ),
                ProjectRoot::new("brightray", ["browser", "common"]),
            ],
        }
    }
}

impl Config {
    /// Load `.cpplint-gate.toml` from `dir`, or `explicit` if given.
    /// If missing, return defaults. Ensures `extensions/roots` are never empty.
    pub fn load_or_default(dir: &Path, explicit: Option<&Path>) -> GateResult<Self> {
        let file = match explicit {
            Some(p) => {
                if !p.is_file() {
                    bail!("config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => dir.join(CONFIG_FILE),
        };
        if !file.exists() {
            return Ok(Config::default());
        }
        let s = fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let mut cfg: Config =
            toml::from_str(&s).with_context(|| format!("parsing {}", file.display()))?;
        if cfg.extensions.is_empty() {
            cfg.extensions = Config::default().extensions;
        }
        if cfg.roots.is_empty() {
            cfg.roots = Config::default().roots;
        }
        Ok(cfg)
    }

    /// Write default configs to .cpplint-gate.toml
    pub fn write_default_config_at(dir: &Path, force: bool) -> GateResult<PathBuf> {
        let file = dir.join(CONFIG_FILE);
        if file.exists() && !force {
            bail!(
                "{} already exists; pass --force to overwrite",
                file.display()
            );
        }
        let s = toml::to_string_pretty(&Self::default())?;
        fs::write(&file, s).with_context(|| format!("writing {}", file.display()))?;
        Ok(file)
    }

    /// Absolute location of the linter under `project_root`.
    pub fn linter_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.linter)
    }

    /// Extension matcher for this configuration.
    pub fn matcher(&self) -> SourceMatcher {
        SourceMatcher::new(&self.extensions)
    }

    /// Exclusion registry for this configuration.
    pub fn exclusions(&self) -> Exclusions {
        Exclusions::new(self.exclude.iter().cloned())
    }
}
