//! Test utilities and mocks for cargo-identify unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use cargo_identify::test_support::{write_manifest, MockInspector};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     write_manifest(&tmp.path().join("app"), "[package]\nname = \"app\"");
//!
//!     let inspector = MockInspector::new().with_binary(tmp.path().join("app/Cargo.toml"));
//!     // Hand the inspector to a CargoIdentifier...
//! }
//! ```

pub mod fixtures;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::artifact::ArtifactInspector;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Mock artifact inspector.
///
/// Reports a manifest as binary only if it was registered with
/// [`MockInspector::with_binary`], and records every manifest it was
/// asked about.
#[derive(Debug, Default)]
pub struct MockInspector {
    binaries: HashSet<PathBuf>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockInspector {
    /// Create an inspector that reports every manifest as non-binary.
    pub fn new() -> Self {
        MockInspector::default()
    }

    /// Report the given manifest as binary.
    pub fn with_binary(mut self, manifest_path: impl AsRef<Path>) -> Self {
        self.binaries.insert(manifest_path.as_ref().to_path_buf());
        self
    }

    /// Get all manifests that were inspected, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl ArtifactInspector for MockInspector {
    fn is_binary_artifact(&self, manifest_path: &Path) -> bool {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(manifest_path.to_path_buf());
        }
        self.binaries.contains(manifest_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_inspector() {
        let inspector = MockInspector::new().with_binary("/ws/app/Cargo.toml");

        assert!(inspector.is_binary_artifact(Path::new("/ws/app/Cargo.toml")));
        assert!(!inspector.is_binary_artifact(Path::new("/ws/lib/Cargo.toml")));
        assert_eq!(inspector.calls().len(), 2);
    }
}
