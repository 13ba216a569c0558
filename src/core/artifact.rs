//! Artifact-kind oracle.
//!
//! Whether a crate produces an executable is answered by the external
//! manifest tool (`cargo read-manifest`), never by looking at the TOML
//! ourselves: targets can be auto-discovered from `src/main.rs` and
//! `src/bin/` without being declared.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::util::config::ToolConfig;
use crate::util::process::{find_executable, ProcessBuilder};

/// Target kind designating an executable.
pub const BINARY_KIND: &str = "bin";

/// Answers whether a manifest describes a binary crate.
///
/// Implementations must treat every failure as "not binary".
pub trait ArtifactInspector {
    /// Check if the manifest at `manifest_path` declares a binary target.
    fn is_binary_artifact(&self, manifest_path: &Path) -> bool;
}

impl<T: ArtifactInspector + ?Sized> ArtifactInspector for &T {
    fn is_binary_artifact(&self, manifest_path: &Path) -> bool {
        (**self).is_binary_artifact(manifest_path)
    }
}

/// Inspector backed by `cargo read-manifest`.
#[derive(Debug, Clone)]
pub struct CargoInspector {
    program: PathBuf,
    args: Vec<String>,
}

impl CargoInspector {
    /// Create an inspector running `cargo` from PATH.
    pub fn new() -> Self {
        Self::from_config(&ToolConfig::default())
    }

    /// Create an inspector for the configured tool.
    ///
    /// The program is resolved through PATH when possible; otherwise the
    /// configured name is used as-is and a spawn failure is reported when
    /// the inspector runs.
    pub fn from_config(tool: &ToolConfig) -> Self {
        let program =
            find_executable(&tool.program).unwrap_or_else(|| PathBuf::from(&tool.program));
        CargoInspector {
            program,
            args: tool.args.clone(),
        }
    }

    /// Get the program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, manifest_path: &Path) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(&self.args)
            .args(["read-manifest", "--manifest-path"])
            .arg(manifest_path)
    }
}

impl Default for CargoInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactInspector for CargoInspector {
    fn is_binary_artifact(&self, manifest_path: &Path) -> bool {
        let cmd = self.command(manifest_path);
        tracing::debug!("running `{}`", cmd.display_command());

        let output = match cmd.exec() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("{:#}", e);
                return false;
            }
        };

        if !output.status.success() {
            tracing::warn!("{}", String::from_utf8_lossy(&output.stderr).trim_end());
            return false;
        }

        match has_binary_target(&output.stdout) {
            Ok(is_binary) => is_binary,
            Err(e) => {
                tracing::warn!(
                    "unexpected output from `{}`: {}",
                    cmd.display_command(),
                    e
                );
                false
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReadManifest {
    #[serde(default)]
    targets: Vec<TargetEntry>,
}

#[derive(Debug, Deserialize)]
struct TargetEntry {
    #[serde(default)]
    kind: TargetKind,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TargetKind {
    One(String),
    Many(Vec<String>),
}

impl Default for TargetKind {
    fn default() -> Self {
        TargetKind::Many(Vec::new())
    }
}

impl TargetKind {
    fn contains(&self, kind: &str) -> bool {
        match self {
            TargetKind::One(k) => k == kind,
            TargetKind::Many(kinds) => kinds.iter().any(|k| k == kind),
        }
    }
}

/// Parse `read-manifest` JSON output and check for a binary target.
pub fn has_binary_target(json: &[u8]) -> Result<bool, serde_json::Error> {
    let manifest: ReadManifest = serde_json::from_slice(json)?;
    Ok(manifest
        .targets
        .iter()
        .any(|target| target.kind.contains(BINARY_KIND)))
}
