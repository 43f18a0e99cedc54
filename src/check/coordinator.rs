//! Fan-out of registry lookups and result aggregation
//!
//! Every declared dependency gets its own lookup future; all futures are
//! launched together and joined before any aggregation happens. Lookup
//! failures are contained per package and logged, never propagated.

use std::collections::BTreeMap;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::check::semver::parse_version;
use crate::check::types::{CheckedPackages, Dependency, Package};
use crate::registry::Registry;

/// Check a single dependency against the registry
///
/// Returns None when the lookup fails or the registry reports a version that
/// does not parse; both cases are logged as warnings and the run continues
/// without the package.
async fn check_package(registry: &dyn Registry, dependency: &Dependency) -> Option<Package> {
    match registry.fetch_latest(&dependency.name).await {
        Ok(latest) => {
            if let Err(e) = parse_version(&latest.version) {
                warn!("Ignoring {}: registry reported {}", dependency.name, e);
                return None;
            }
            Some(Package {
                name: latest.name,
                current_version: dependency.version.clone(),
                available_version: latest.version,
            })
        }
        Err(e) => {
            warn!("Version lookup for {} failed: {}", dependency.name, e);
            None
        }
    }
}

/// Check every dependency and partition the results
///
/// Duplicate names are not deduplicated before dispatch; each occurrence
/// performs its own lookup. Completed lookups are keyed by the declared name
/// in input order, so for duplicate names the last occurrence wins
/// deterministically.
pub async fn check_packages(
    registry: &dyn Registry,
    dependencies: Vec<Dependency>,
) -> CheckedPackages {
    debug!("Checking {} dependencies", dependencies.len());

    let lookups = dependencies.iter().map(|dependency| async move {
        (dependency, check_package(registry, dependency).await)
    });

    let mut results: BTreeMap<String, Package> = BTreeMap::new();
    for (dependency, package) in join_all(lookups).await {
        if let Some(package) = package {
            results.insert(dependency.name.clone(), package);
        }
    }

    CheckedPackages::partition(results.into_values())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::registry::{LatestVersion, MockRegistry, RegistryError};

    /// Registry serving canned versions; unknown packages are not found
    struct StaticRegistry {
        versions: HashMap<String, String>,
    }

    impl StaticRegistry {
        fn new(versions: &[(&str, &str)]) -> Self {
            Self {
                versions: versions
                    .iter()
                    .map(|(name, version)| (name.to_string(), version.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait::async_trait]
    impl Registry for StaticRegistry {
        async fn fetch_latest(&self, package_name: &str) -> Result<LatestVersion, RegistryError> {
            match self.versions.get(package_name) {
                Some(version) => Ok(LatestVersion {
                    name: package_name.to_string(),
                    version: version.clone(),
                }),
                None => Err(RegistryError::NotFound(package_name.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn check_packages_partitions_into_latest_and_outdated() {
        let registry = StaticRegistry::new(&[("up-to-date", "1.0.0"), ("behind", "2.0.0")]);
        let dependencies = vec![
            Dependency::new("up-to-date", "1.0.0"),
            Dependency::new("behind", "1.0.0"),
        ];

        let checked = check_packages(&registry, dependencies).await;

        assert_eq!(
            checked.latest,
            vec![Package {
                name: "up-to-date".to_string(),
                current_version: "1.0.0".to_string(),
                available_version: "1.0.0".to_string(),
            }]
        );
        assert_eq!(
            checked.outdated,
            vec![Package {
                name: "behind".to_string(),
                current_version: "1.0.0".to_string(),
                available_version: "2.0.0".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn check_packages_continues_when_one_lookup_fails() {
        // "missing" is not served by the registry and must not affect "kept"
        let registry = StaticRegistry::new(&[("kept", "2.0.0")]);
        let dependencies = vec![
            Dependency::new("missing", "1.0.0"),
            Dependency::new("kept", "1.0.0"),
        ];

        let checked = check_packages(&registry, dependencies).await;

        assert!(checked.latest.is_empty());
        assert_eq!(checked.outdated.len(), 1);
        assert_eq!(checked.outdated[0].name, "kept");
    }

    #[tokio::test]
    async fn check_packages_resolves_duplicate_names_to_the_last_occurrence() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_latest()
            .times(2)
            .returning(|name| {
                Ok(LatestVersion {
                    name: name.to_string(),
                    version: "3.0.0".to_string(),
                })
            });

        // Same package declared twice with different versions; the later
        // declaration provides the record.
        let dependencies = vec![
            Dependency::new("duplicated", "1.0.0"),
            Dependency::new("duplicated", "3.0.0"),
        ];

        let checked = check_packages(&registry, dependencies).await;

        assert!(checked.outdated.is_empty());
        assert_eq!(
            checked.latest,
            vec![Package {
                name: "duplicated".to_string(),
                current_version: "3.0.0".to_string(),
                available_version: "3.0.0".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn check_packages_drops_packages_with_unparsable_registry_versions() {
        let registry = StaticRegistry::new(&[("weird", "not-a-version"), ("fine", "1.0.0")]);
        let dependencies = vec![
            Dependency::new("weird", "1.0.0"),
            Dependency::new("fine", "1.0.0"),
        ];

        let checked = check_packages(&registry, dependencies).await;

        assert!(checked.outdated.is_empty());
        assert_eq!(checked.latest.len(), 1);
        assert_eq!(checked.latest[0].name, "fine");
    }

    #[tokio::test]
    async fn check_packages_records_the_registry_reported_name() {
        let mut registry = MockRegistry::new();
        registry.expect_fetch_latest().returning(|_| {
            Ok(LatestVersion {
                name: "canonical-name".to_string(),
                version: "1.0.0".to_string(),
            })
        });

        let checked =
            check_packages(&registry, vec![Dependency::new("alias-name", "1.0.0")]).await;

        assert_eq!(checked.latest[0].name, "canonical-name");
    }

    #[tokio::test]
    async fn check_packages_with_no_dependencies_is_empty() {
        let registry = StaticRegistry::new(&[]);

        let checked = check_packages(&registry, Vec::new()).await;

        assert!(checked.is_empty());
    }
}
