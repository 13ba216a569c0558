//! The host orchestrator's package metadata record.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Dependency phase used while building a package.
pub const BUILD_PHASE: &str = "build";

/// Dependency phase used while running a package.
pub const RUN_PHASE: &str = "run";

/// Package metadata for one candidate directory.
///
/// The host creates one record per candidate and hands it to each
/// identification plugin in turn. A plugin only claims a record that is
/// untyped or already carries its own type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// The candidate directory
    pub path: PathBuf,

    /// Package type, set by the plugin that claims the candidate
    #[serde(rename = "type")]
    pub package_type: Option<String>,

    /// Package name
    pub name: Option<String>,

    /// Dependency names keyed by phase
    pub dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl PackageMetadata {
    /// Create an empty, unclaimed record for a directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PackageMetadata {
            path: path.into(),
            package_type: None,
            name: None,
            dependencies: BTreeMap::new(),
        }
    }

    /// Pre-assign a package type, as another plugin would.
    pub fn with_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    /// Pre-assign a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the candidate directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the record has been claimed by any plugin.
    pub fn is_identified(&self) -> bool {
        self.package_type.is_some()
    }

    /// Get the dependencies of a phase, if any were recorded.
    pub fn phase(&self, phase: &str) -> Option<&BTreeSet<String>> {
        self.dependencies.get(phase)
    }

    /// Union dependency names into a phase.
    pub fn add_dependencies<I, S>(&mut self, phase: &str, deps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies
            .entry(phase.to_string())
            .or_default()
            .extend(deps.into_iter().map(Into::into));
    }
}
