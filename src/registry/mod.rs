//! Registry abstraction for fetching the latest published package version

pub mod npm;

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Abbreviated package metadata returned by the registry's `latest` endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LatestVersion {
    /// Name the registry publishes the package under
    pub name: String,
    /// Latest published version
    pub version: String,
}

/// Trait for fetching the latest version of a package from a registry
///
/// Implementations must be safely callable concurrently for distinct package
/// names; a failed lookup must never affect sibling lookups.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the latest published version for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash", "@types/node")
    ///
    /// # Returns
    /// * `Ok(LatestVersion)` - The registry-reported name and latest version
    /// * `Err(RegistryError)` - If the lookup fails
    async fn fetch_latest(&self, package_name: &str) -> Result<LatestVersion, RegistryError>;
}
