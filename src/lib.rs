//! cargo-identify - Cargo package identification for build orchestrators
//!
//! This crate decides whether a directory holds a buildable Cargo package
//! and, if so, extracts its name and dependency set into the host
//! orchestrator's package metadata.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for cargo-identify unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock artifact inspector and manifest
/// fixture writers.
#[cfg(test)]
pub mod test_support;

pub use self::core::{
    artifact::{ArtifactInspector, CargoInspector},
    manifest::{ExtractedInfo, ManifestDocument, ManifestError, PackageInfo, WorkspaceInfo},
    metadata::PackageMetadata,
};

pub use ops::identify::{CargoIdentifier, IdentifyError, PackageIdentifier};
pub use util::config::Config;
