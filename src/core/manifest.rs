//! Cargo.toml reading and project info extraction.
//!
//! Only the handful of keys identification needs are looked at: the
//! package name, the dependency table and the workspace member list.
//! Everything else in the manifest is ignored.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use toml::{Table, Value};

use crate::core::artifact::ArtifactInspector;
use crate::core::workspace::extract_workspace_members;

/// Errors raised while reading a manifest from disk.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to read manifest: {}", .path.display())]
    #[diagnostic(code(cargo_identify::manifest::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decoding error when processing \"{}\"", .path.display())]
    #[diagnostic(
        code(cargo_identify::manifest::decode),
        help("Check the manifest for TOML syntax errors")
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// An untyped, parsed Cargo.toml.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    table: Table,
}

impl ManifestDocument {
    /// Load and parse a manifest file.
    ///
    /// Callers are expected to check that the file exists first; a missing
    /// file surfaces as [`ManifestError::Read`].
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content. `path` is only used for error reporting;
    /// the caller decides how loudly a failure is logged.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        content
            .parse::<Table>()
            .map(|table| ManifestDocument { table })
            .map_err(|source| ManifestError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Look up a nested value by key path, e.g. `["workspace", "members"]`.
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        let mut value = self.table.get(*first)?;
        for key in rest {
            value = value.as_table()?.get(*key)?;
        }
        Some(value)
    }
}

/// Workspace root information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceInfo {
    /// Declared member paths whose manifests describe a binary, in
    /// declaration order.
    pub members: Vec<String>,
}

impl WorkspaceInfo {
    /// Check whether a directory name is one of the qualifying members.
    pub fn contains(&self, dir_name: &str) -> bool {
        self.members.iter().any(|m| m == dir_name)
    }
}

/// Leaf package information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Declared package name, or the directory name when none is declared.
    pub name: String,
    /// Dependency names, never including the package itself.
    pub dependencies: BTreeSet<String>,
}

/// What a manifest describes: either a workspace root or a leaf package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedInfo {
    Workspace(WorkspaceInfo),
    Package(PackageInfo),
}

/// Extract the identification-relevant information from a manifest.
///
/// A manifest declaring `workspace.members` is always a workspace, even
/// when it also has a `[package]` section.
pub fn extract_info(
    doc: &ManifestDocument,
    manifest_path: &Path,
    inspector: &dyn ArtifactInspector,
) -> ExtractedInfo {
    if let Some(members) = extract_workspace_members(doc, manifest_path, inspector) {
        return ExtractedInfo::Workspace(WorkspaceInfo { members });
    }

    let name = extract_project_name(doc).unwrap_or_else(|| fallback_name(manifest_path));

    // A package may list itself under an alias; that is not a real edge.
    let mut dependencies = extract_dependencies(doc);
    dependencies.remove(&name);

    ExtractedInfo::Package(PackageInfo { name, dependencies })
}

/// Get `package.name`, if declared.
pub fn extract_project_name(doc: &ManifestDocument) -> Option<String> {
    doc.get(&["package", "name"])
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Get the names declared under `[dependencies]`.
pub fn extract_dependencies(doc: &ManifestDocument) -> BTreeSet<String> {
    doc.get(&["dependencies"])
        .and_then(Value::as_table)
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default()
}

fn fallback_name(manifest_path: &Path) -> String {
    let path = crate::util::fs::absolute_path(manifest_path);
    path.parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
