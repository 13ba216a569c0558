//! Manifest fixtures for common test scenarios.

use std::path::{Path, PathBuf};

/// Write a `Cargo.toml` with the given content into `dir`, creating the
/// directory if needed. Returns the manifest path.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("Cargo.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Manifest for a package with the given name and dependencies.
pub fn package_manifest(name: &str, deps: &[&str]) -> String {
    let mut manifest = format!(
        r#"[package]
name = "{name}"
version = "0.1.0"
edition = "2021"
"#
    );

    if !deps.is_empty() {
        manifest.push_str("\n[dependencies]\n");
        for dep in deps {
            manifest.push_str(&format!("{dep} = \"1\"\n"));
        }
    }

    manifest
}

/// Manifest for a virtual workspace with the given members.
pub fn workspace_manifest(members: &[&str]) -> String {
    let members = members
        .iter()
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!("[workspace]\nresolver = \"2\"\nmembers = [{members}]\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::{extract_dependencies, extract_project_name, ManifestDocument};

    #[test]
    fn test_package_manifest_parses() {
        let content = package_manifest("app", &["serde", "clap"]);
        let doc = ManifestDocument::parse(&content, Path::new("Cargo.toml")).unwrap();

        assert_eq!(extract_project_name(&doc).as_deref(), Some("app"));
        assert_eq!(extract_dependencies(&doc).len(), 2);
    }

    #[test]
    fn test_workspace_manifest_parses() {
        let content = workspace_manifest(&["a", "b"]);
        let doc = ManifestDocument::parse(&content, Path::new("Cargo.toml")).unwrap();

        let members = doc.get(&["workspace", "members"]).unwrap();
        assert_eq!(members.as_array().unwrap().len(), 2);
    }
}
