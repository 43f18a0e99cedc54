//! Audit declared npm dependencies against the registry.
//!
//! The crate checks every dependency declared in a `package.json` against the
//! npm registry's `latest` dist-tag and partitions the packages into
//! "up to date" and "outdated", then renders the partition as a plain text
//! summary and optional text/JSON/HTML/XML report files.
//!
//! # Modules
//!
//! - [`config`]: report kinds, per-report configuration and registry constants
//! - [`manifest`]: reads dependencies from a `package.json`
//! - [`check`]: concurrent version lookups and the latest/outdated partition
//! - [`registry`]: registry abstraction and the npm implementation
//! - [`report`]: renderers for the four report formats

pub mod check;
pub mod config;
pub mod manifest;
pub mod registry;
pub mod report;
