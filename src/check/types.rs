//! Dependency and package models

use std::cmp::Ordering;

use tracing::warn;

use crate::check::semver::compare_versions;

/// One dependency declared by the project under inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name (e.g., "lodash", "@types/node")
    pub name: String,
    /// Version the project declares
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// One successful registry lookup paired with the declared version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Name reported by the registry
    pub name: String,
    /// Version the project declares
    pub current_version: String,
    /// Latest version published to the registry
    pub available_version: String,
}

/// Checked packages partitioned by version status
///
/// The two lists are disjoint and each is sorted ascending by package name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedPackages {
    /// Packages whose declared version is behind the registry
    pub outdated: Vec<Package>,
    /// Packages already at (or ahead of) the latest registry version
    pub latest: Vec<Package>,
}

impl CheckedPackages {
    /// Partitions packages into outdated and latest, sorted by name.
    ///
    /// A package is outdated when its declared version orders strictly below
    /// the registry version; equal and declared-ahead both count as latest.
    /// Packages with a version that fails to parse on either side are dropped
    /// with a warning so one malformed version never aborts the run.
    pub fn partition(packages: impl IntoIterator<Item = Package>) -> Self {
        let mut outdated = Vec::new();
        let mut latest = Vec::new();

        for package in packages {
            match compare_versions(&package.current_version, &package.available_version) {
                Ok(Ordering::Less) => outdated.push(package),
                Ok(_) => latest.push(package),
                Err(e) => {
                    warn!("Skipping {}: {}", package.name, e);
                }
            }
        }

        outdated.sort_by(|a, b| a.name.cmp(&b.name));
        latest.sort_by(|a, b| a.name.cmp(&b.name));

        Self { outdated, latest }
    }

    /// Returns true when neither list contains a package
    pub fn is_empty(&self) -> bool {
        self.outdated.is_empty() && self.latest.is_empty()
    }
}
