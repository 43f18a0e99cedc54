//! Report rendering and file output
//!
//! Each report format implements [`PackageRenderer`] and produces the exact
//! same bytes for the same checked packages. The plain text report is always
//! printed to stdout; file reports are only written when enabled.

pub mod html;
pub mod json;
pub mod markup;
pub mod text;
pub mod xml;

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use tracing::info;

use crate::check::types::CheckedPackages;
use crate::config::{ReportKind, ReportsConfig};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A report format
pub trait PackageRenderer {
    /// The format this renderer produces
    fn kind(&self) -> ReportKind;

    /// Writes the report for `packages` to `out`
    fn write_packages(
        &self,
        packages: &CheckedPackages,
        out: &mut dyn Write,
    ) -> Result<(), ReportError>;
}

/// Returns the renderer for a report kind
pub fn renderer_for(kind: ReportKind) -> Box<dyn PackageRenderer> {
    match kind {
        ReportKind::PlainText => Box::new(text::TextRenderer),
        ReportKind::Json => Box::new(json::JsonRenderer),
        ReportKind::Html => Box::new(html::HtmlRenderer),
        ReportKind::Xml => Box::new(xml::XmlRenderer),
    }
}

/// Writes the plain text summary to stdout, then every enabled report file
///
/// Parent directories are created as needed. Reports are written in the fixed
/// configuration order, so log output and file system effects are stable
/// across runs.
pub fn write_reports(
    packages: &CheckedPackages,
    config: &ReportsConfig,
) -> Result<(), ReportError> {
    let mut stdout = std::io::stdout();
    renderer_for(ReportKind::PlainText).write_packages(packages, &mut stdout)?;

    for (kind, report) in config.iter() {
        if !report.enabled {
            continue;
        }
        if let Some(parent) = report.output.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&report.output)?);
        renderer_for(kind).write_packages(packages, &mut writer)?;
        writer.flush()?;
        info!("{} report saved to {}", kind.as_str(), report.output.display());
    }

    Ok(())
}
