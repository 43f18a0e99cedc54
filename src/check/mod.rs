//! Concurrent version checking for declared dependencies
//!
//! One lookup is launched per declared dependency, all at once; results are
//! collected after a join barrier and partitioned into up-to-date and
//! outdated packages.
//!
//! # Modules
//!
//! - [`coordinator`]: fan-out of registry lookups and result aggregation
//! - [`semver`]: version normalization and ordering comparison
//! - [`types`]: dependency and package models plus the partition

pub mod coordinator;
pub mod semver;
pub mod types;
