//! JSON report

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::check::types::CheckedPackages;
use crate::config::ReportKind;
use crate::report::{PackageRenderer, ReportError};

/// Document layout of the JSON report
#[derive(Serialize)]
struct Report<'a> {
    latest: Vec<LatestEntry<'a>>,
    outdated: Vec<OutdatedEntry<'a>>,
}

#[derive(Serialize)]
struct LatestEntry<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutdatedEntry<'a> {
    name: &'a str,
    current_version: &'a str,
    latest_version: &'a str,
}

pub struct JsonRenderer;

impl PackageRenderer for JsonRenderer {
    fn kind(&self) -> ReportKind {
        ReportKind::Json
    }

    fn write_packages(
        &self,
        packages: &CheckedPackages,
        out: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = Report {
            latest: packages
                .latest
                .iter()
                .map(|package| LatestEntry {
                    name: &package.name,
                    version: &package.current_version,
                })
                .collect(),
            outdated: packages
                .outdated
                .iter()
                .map(|package| OutdatedEntry {
                    name: &package.name,
                    current_version: &package.current_version,
                    latest_version: &package.available_version,
                })
                .collect(),
        };

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
        report.serialize(&mut serializer)?;
        writeln!(out)?;
        Ok(())
    }
}
