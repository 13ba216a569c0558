//! Cargo package identification.
//!
//! Decision sequence for one candidate directory:
//! 1. skip records already claimed by another package type
//! 2. skip directories without a `Cargo.toml`
//! 3. parse the manifest; a corrupt candidate manifest is fatal
//! 4. skip workspace roots
//! 5. skip library-only crates
//! 6. require the parent directory to be a workspace listing this
//!    directory among its binary members
//! 7. claim the record

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::core::artifact::{ArtifactInspector, CargoInspector};
use crate::core::manifest::{extract_info, ExtractedInfo, ManifestDocument, ManifestError};
use crate::core::metadata::{PackageMetadata, BUILD_PHASE, RUN_PHASE};
use crate::core::{MANIFEST_NAME, PACKAGE_TYPE};
use crate::util::config::Config;
use crate::util::diagnostic::{suggestions, Diagnostic as UserDiagnostic};
use crate::util::fs::absolute_path;

/// Fatal identification error.
#[derive(Debug, Error, Diagnostic)]
pub enum IdentifyError {
    #[error("failed to extract Rust package information from \"{}\"", .path.display())]
    #[diagnostic(
        code(cargo_identify::identify::extraction_failed),
        help("Fix the manifest syntax or remove the directory from the build")
    )]
    ExtractionFailed {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
}

impl IdentifyError {
    /// Get the manifest that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            IdentifyError::ExtractionFailed { path, .. } => path,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> UserDiagnostic {
        match self {
            IdentifyError::ExtractionFailed { path, source } => {
                let mut diag = UserDiagnostic::error(self.to_string()).with_location(path);
                if let ManifestError::Decode { source, .. } = source {
                    diag = diag.with_context(source.message().trim_end().to_string());
                } else {
                    diag = diag.with_context(source.to_string());
                }
                diag.with_suggestion(suggestions::INVALID_MANIFEST)
            }
        }
    }
}

/// A package identification extension.
///
/// Signals its outcome only by mutating `metadata`; returning `Ok(())`
/// without touching the record means the candidate was not claimed.
pub trait PackageIdentifier {
    /// Try to identify the package at `metadata.path`.
    fn identify(&self, metadata: &mut PackageMetadata) -> Result<(), IdentifyError>;
}

/// Identifies binary Cargo crates that are members of a workspace.
#[derive(Debug, Clone)]
pub struct CargoIdentifier<I = CargoInspector> {
    inspector: I,
}

impl CargoIdentifier<CargoInspector> {
    /// Create an identifier using the configured manifest tool.
    pub fn from_config(config: &Config) -> Self {
        CargoIdentifier {
            inspector: CargoInspector::from_config(&config.tool),
        }
    }
}

impl<I: ArtifactInspector> CargoIdentifier<I> {
    /// Create an identifier with a custom artifact inspector.
    pub fn new(inspector: I) -> Self {
        CargoIdentifier { inspector }
    }

    /// Get the artifact inspector.
    pub fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Check whether the parent directory is a workspace qualifying this
    /// candidate as one of its binary members.
    fn is_workspace_member(&self, candidate: &Path) -> bool {
        // Only a filesystem root has no parent to consult.
        let Some(parent) = candidate.parent() else {
            return true;
        };
        let dir_name = candidate
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parent_manifest = parent.join(MANIFEST_NAME);
        if !parent_manifest.is_file() {
            tracing::debug!(
                "{}: no parent manifest, not a workspace member",
                candidate.display()
            );
            return false;
        }

        // A corrupt parent counts as a non-workspace parent.
        let parent_doc = match ManifestDocument::load(&parent_manifest) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!("{}: {}", candidate.display(), e);
                return false;
            }
        };

        match extract_info(&parent_doc, &parent_manifest, &self.inspector) {
            ExtractedInfo::Workspace(ws) => {
                if ws.contains(&dir_name) {
                    true
                } else {
                    tracing::debug!(
                        "{}: `{}` is not a binary member of the parent workspace",
                        candidate.display(),
                        dir_name
                    );
                    false
                }
            }
            ExtractedInfo::Package(_) => {
                tracing::debug!(
                    "{}: parent manifest is a package, not a workspace",
                    candidate.display()
                );
                false
            }
        }
    }
}

impl<I: ArtifactInspector> PackageIdentifier for CargoIdentifier<I> {
    fn identify(&self, metadata: &mut PackageMetadata) -> Result<(), IdentifyError> {
        if let Some(ref package_type) = metadata.package_type {
            if package_type != PACKAGE_TYPE {
                return Ok(());
            }
        }

        let manifest_path = metadata.path.join(MANIFEST_NAME);
        if !manifest_path.is_file() {
            return Ok(());
        }

        let doc = ManifestDocument::load(&manifest_path).map_err(|source| {
            tracing::error!("{}", source);
            IdentifyError::ExtractionFailed {
                path: absolute_path(&manifest_path),
                source,
            }
        })?;

        let package = match extract_info(&doc, &manifest_path, &self.inspector) {
            ExtractedInfo::Workspace(_) => {
                tracing::debug!("{}: workspace root, not claimed", metadata.path.display());
                return Ok(());
            }
            ExtractedInfo::Package(package) => package,
        };

        if !self.inspector.is_binary_artifact(&manifest_path) {
            tracing::debug!("{}: not a binary crate", metadata.path.display());
            return Ok(());
        }

        if !self.is_workspace_member(&absolute_path(&metadata.path)) {
            return Ok(());
        }

        tracing::debug!(
            "{}: identified cargo package `{}`",
            metadata.path.display(),
            package.name
        );

        metadata.package_type = Some(PACKAGE_TYPE.to_string());
        if metadata.name.is_none() {
            metadata.name = Some(package.name);
        }
        metadata.add_dependencies(BUILD_PHASE, package.dependencies.iter().cloned());
        metadata.add_dependencies(RUN_PHASE, package.dependencies);

        Ok(())
    }
}
