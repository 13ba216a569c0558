//! Workspace detection and binary-member filtering.
//!
//! A workspace root is any manifest declaring `workspace.members`. Only the
//! members whose own manifests describe a binary target qualify; library
//! members are dropped.

use std::path::Path;

use toml::Value;

use crate::core::artifact::ArtifactInspector;
use crate::core::manifest::ManifestDocument;
use crate::core::MANIFEST_NAME;
use crate::util::fs::absolute_path;

/// Get the qualifying workspace members declared by a manifest.
///
/// Returns `None` when the manifest has no `workspace.members` key. An empty
/// member list is still a workspace and yields `Some(vec![])`. Members keep
/// their declared spelling and declaration order.
pub fn extract_workspace_members(
    doc: &ManifestDocument,
    manifest_path: &Path,
    inspector: &dyn ArtifactInspector,
) -> Option<Vec<String>> {
    let members = doc.get(&["workspace", "members"])?;

    let ws_root = absolute_path(manifest_path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let declared: &[Value] = match members.as_array() {
        Some(list) => list.as_slice(),
        None => {
            tracing::debug!(
                "workspace.members in {} is not an array",
                manifest_path.display()
            );
            &[]
        }
    };

    let mut qualifying = Vec::new();
    for member in declared {
        let Some(member) = member.as_str() else {
            tracing::debug!("skipping non-string workspace member: {}", member);
            continue;
        };

        let member_manifest = ws_root.join(member).join(MANIFEST_NAME);
        if inspector.is_binary_artifact(&member_manifest) {
            qualifying.push(member.to_string());
        } else {
            tracing::debug!("workspace member `{}` is not a binary crate", member);
        }
    }

    Some(qualifying)
}
