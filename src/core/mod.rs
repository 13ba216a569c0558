//! Core data structures for cargo-identify.
//!
//! This module contains the foundational pieces of identification:
//! - Manifest reading and project info extraction
//! - Workspace member filtering
//! - The artifact-kind oracle
//! - The host's package metadata record

pub mod artifact;
pub mod manifest;
pub mod metadata;
pub mod workspace;

pub use artifact::{ArtifactInspector, CargoInspector};
pub use manifest::{ExtractedInfo, ManifestDocument, ManifestError, PackageInfo, WorkspaceInfo};
pub use metadata::PackageMetadata;
pub use workspace::extract_workspace_members;

/// Fixed manifest filename looked up in every candidate directory.
pub const MANIFEST_NAME: &str = "Cargo.toml";

/// Package type claimed by this identifier.
pub const PACKAGE_TYPE: &str = "cargo";
