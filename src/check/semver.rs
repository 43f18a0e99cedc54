use std::cmp::Ordering;

use semver::Version;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Pads a missing minor or patch component with zeros; a pre-release or build
/// suffix is preserved across the padding.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2-rc.1" -> Version(1, 2, 0, pre "rc.1")
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let (core, suffix) = match version.find(['-', '+']) {
        Some(at) => version.split_at(at),
        None => (version, ""),
    };

    let normalized = match core.matches('.').count() {
        0 => format!("{core}.0.0{suffix}"),
        1 => format!("{core}.0{suffix}"),
        _ => version.to_string(),
    };

    Version::parse(&normalized).map_err(|_| VersionError::InvalidFormat(version.to_string()))
}

/// Compare two version strings under semantic versioning precedence
///
/// Numeric identifiers compare numerically, a pre-release version has lower
/// precedence than its associated normal version, and identifiers are
/// compared left to right. Equal versions written differently ("1.0" and
/// "1.0.0") compare equal, and build metadata is ignored.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(parse_version(a)?.cmp_precedence(&parse_version(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", "1.0.0")]
    #[case("1.2", "1.2.0")]
    #[case("1.2.3", "1.2.3")]
    #[case("1.2-rc.1", "1.2.0-rc.1")]
    #[case("2-alpha", "2.0.0-alpha")]
    #[case("1.2.3+build.5", "1.2.3+build.5")]
    fn parse_version_normalizes_partial_versions(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            parse_version(input).unwrap(),
            Version::parse(expected).unwrap()
        );
    }

    #[rstest]
    #[case("")]
    #[case("not-a-version")]
    #[case("1.2.3.4")]
    #[case("1..3")]
    fn parse_version_rejects_malformed_versions(#[case] input: &str) {
        assert_eq!(
            parse_version(input),
            Err(VersionError::InvalidFormat(input.to_string()))
        );
    }

    #[rstest]
    #[case("1.0.0", "1.0.0", Ordering::Equal)]
    #[case("1.0", "1.0.0", Ordering::Equal)]
    #[case("1", "1.0.0", Ordering::Equal)]
    #[case("1.0.0", "2.0.0", Ordering::Less)]
    #[case("2.0.0", "1.9.9", Ordering::Greater)]
    #[case("1.0.0-alpha", "1.0.0", Ordering::Less)]
    #[case("1.0.0-alpha", "1.0.0-beta", Ordering::Less)]
    #[case("1.0.0-alpha.9", "1.0.0-alpha.10", Ordering::Less)]
    #[case("1.0.0-alpha.1", "1.0.0-alpha", Ordering::Greater)]
    #[case("1.0.0+build.1", "1.0.0+build.2", Ordering::Equal)]
    fn compare_versions_follows_semver_precedence(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b).unwrap(), expected);
    }

    #[test]
    fn compare_versions_fails_when_either_side_is_malformed() {
        assert!(compare_versions("oops", "1.0.0").is_err());
        assert!(compare_versions("1.0.0", "oops").is_err());
    }
}
