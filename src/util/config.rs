//! Configuration file support for cargo-identify.
//!
//! Configuration is optional; every field has a default. A file only needs
//! the keys it overrides:
//!
//! ```toml
//! [tool]
//! program = "cargo"
//! args = ["+stable"]
//!
//! [scan]
//! skip_dirs = ["target", "vendor"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// cargo-identify configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest inspection tool
    pub tool: ToolConfig,

    /// Candidate enumeration settings
    pub scan: ScanConfig,
}

/// The external tool asked whether a manifest declares a binary target.
///
/// Invoked as `<program> <args>... read-manifest --manifest-path <path>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Program name or path
    pub program: String,

    /// Leading arguments placed before `read-manifest`
    pub args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            program: "cargo".to_string(),
            args: Vec::new(),
        }
    }
}

/// Settings for recursive candidate discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            skip_dirs: vec!["target".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Parse configuration from TOML.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from an optional path, falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
