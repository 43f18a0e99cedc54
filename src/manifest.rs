//! package.json reading
//!
//! Only the dependency tables are deserialized; everything else in the
//! manifest is ignored. Declaration order is preserved so that duplicate
//! names resolve predictably downstream.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::check::types::Dependency;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PackageManifest {
    dependencies: IndexMap<String, String>,
    dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Flatten both dependency tables in declaration order
    ///
    /// `dependencies` entries come first, then `devDependencies`. A name
    /// present in both tables yields two entries; no deduplication happens
    /// here.
    fn into_dependencies(self) -> Vec<Dependency> {
        self.dependencies
            .into_iter()
            .chain(self.dev_dependencies)
            .map(|(name, spec)| Dependency::new(name, normalize_version_spec(&spec)))
            .collect()
    }
}

/// Read the declared dependencies from a package.json file
pub fn read_dependencies(path: &Path) -> Result<Vec<Dependency>, ManifestError> {
    let content = fs::read_to_string(path)?;
    let manifest: PackageManifest = serde_json::from_str(&content)?;
    let dependencies = manifest.into_dependencies();
    debug!("Read {} dependencies from {}", dependencies.len(), path.display());
    Ok(dependencies)
}

/// Strip common npm range prefixes down to a bare version
///
/// Handles a single leading `>=`, `^`, `~` or `=` plus an optional `v`
/// prefix. Anything more elaborate (unions, wildcards, tags) is passed
/// through unchanged and will be skipped during comparison.
fn normalize_version_spec(spec: &str) -> String {
    let trimmed = spec.trim();
    let stripped = trimmed
        .strip_prefix(">=")
        .or_else(|| trimmed.strip_prefix('^'))
        .or_else(|| trimmed.strip_prefix('~'))
        .or_else(|| trimmed.strip_prefix('='))
        .unwrap_or(trimmed)
        .trim_start();
    stripped.strip_prefix('v').unwrap_or(stripped).to_string()
}
