//! Candidate enumeration and batch identification.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::core::metadata::PackageMetadata;
use crate::core::MANIFEST_NAME;
use crate::ops::identify::{IdentifyError, PackageIdentifier};
use crate::util::config::ScanConfig;

/// Collect candidate directories below `root`.
///
/// Without `recursive` the root itself is the only candidate. With it,
/// every directory holding a manifest is a candidate, in sorted walk
/// order. Hidden directories and the configured skip list are not
/// descended into.
pub fn find_candidates(root: &Path, recursive: bool, scan: &ScanConfig) -> Vec<PathBuf> {
    if !recursive {
        return vec![root.to_path_buf()];
    }

    let mut candidates = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e, scan));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() && entry.path().join(MANIFEST_NAME).is_file() {
                    candidates.push(entry.into_path());
                }
            }
            Err(e) => {
                tracing::warn!("walk error: {}", e);
            }
        }
    }

    candidates
}

fn is_skipped(entry: &DirEntry, scan: &ScanConfig) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || scan.skip_dirs.iter().any(|d| name == d.as_str())
}

/// Run an identifier over every candidate, returning the claimed records.
///
/// Stops at the first fatal error.
pub fn identify_all<P: PackageIdentifier + ?Sized>(
    identifier: &P,
    candidates: &[PathBuf],
) -> Result<Vec<PackageMetadata>, IdentifyError> {
    let mut identified = Vec::new();

    for candidate in candidates {
        let mut metadata = PackageMetadata::new(candidate);
        identifier.identify(&mut metadata)?;
        if metadata.is_identified() {
            identified.push(metadata);
        } else {
            tracing::debug!("{}: not claimed", candidate.display());
        }
    }

    Ok(identified)
}
