use std::path::{Path, PathBuf};

// =============================================================================
// Registry constants
// =============================================================================

/// Default base URL for the npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Accept header value requesting the abbreviated package metadata document
pub const ABBREVIATED_METADATA_ACCEPT: &str = "application/vnd.npm.install-v1+json";

// =============================================================================
// Report output constants
// =============================================================================

/// Directory under the output root that report files are written to
pub const REPORTS_DIR: &str = "npmVersions";

/// Base file name of every report (extension varies per kind)
pub const REPORT_BASENAME: &str = "report";

/// The closed set of report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    PlainText,
    Json,
    Html,
    Xml,
}

impl ReportKind {
    /// All kinds in the order reports are configured and written
    pub const ALL: [ReportKind; 4] = [
        ReportKind::PlainText,
        ReportKind::Json,
        ReportKind::Html,
        ReportKind::Xml,
    ];

    /// Returns the configuration name of the report kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::PlainText => "plainText",
            ReportKind::Json => "json",
            ReportKind::Html => "html",
            ReportKind::Xml => "xml",
        }
    }

    /// Returns the file extension used for the report kind
    pub fn extension(&self) -> &'static str {
        match self {
            ReportKind::PlainText => "txt",
            ReportKind::Json => "json",
            ReportKind::Html => "html",
            ReportKind::Xml => "xml",
        }
    }
}

/// Configuration of a single report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Whether the report file is written
    pub enabled: bool,
    /// Location the report file is written to
    pub output: PathBuf,
}

/// Configuration of all four reports
///
/// Only the plain text report is enabled by default; every report defaults to
/// `<output root>/npmVersions/report.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsConfig {
    pub plain_text: ReportConfig,
    pub json: ReportConfig,
    pub html: ReportConfig,
    pub xml: ReportConfig,
}

impl ReportsConfig {
    /// Creates the default configuration rooted at `output_root`
    pub fn new(output_root: &Path) -> Self {
        let default_output = |kind: ReportKind| {
            output_root
                .join(REPORTS_DIR)
                .join(format!("{REPORT_BASENAME}.{}", kind.extension()))
        };

        Self {
            plain_text: ReportConfig {
                enabled: true,
                output: default_output(ReportKind::PlainText),
            },
            json: ReportConfig {
                enabled: false,
                output: default_output(ReportKind::Json),
            },
            html: ReportConfig {
                enabled: false,
                output: default_output(ReportKind::Html),
            },
            xml: ReportConfig {
                enabled: false,
                output: default_output(ReportKind::Xml),
            },
        }
    }

    pub fn get(&self, kind: ReportKind) -> &ReportConfig {
        match kind {
            ReportKind::PlainText => &self.plain_text,
            ReportKind::Json => &self.json,
            ReportKind::Html => &self.html,
            ReportKind::Xml => &self.xml,
        }
    }

    pub fn get_mut(&mut self, kind: ReportKind) -> &mut ReportConfig {
        match kind {
            ReportKind::PlainText => &mut self.plain_text,
            ReportKind::Json => &mut self.json,
            ReportKind::Html => &mut self.html,
            ReportKind::Xml => &mut self.xml,
        }
    }

    /// Iterates over all report configurations in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (ReportKind, &ReportConfig)> {
        ReportKind::ALL.iter().map(move |kind| (*kind, self.get(*kind)))
    }
}
