use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use npm_versions::check::coordinator::check_packages;
use npm_versions::config::{DEFAULT_REGISTRY_URL, ReportKind, ReportsConfig};
use npm_versions::manifest::read_dependencies;
use npm_versions::registry::npm::NpmRegistry;
use npm_versions::report::write_reports;

/// npm-versions - report outdated npm dependencies
///
/// Reads the dependencies and devDependencies of a package.json, looks up
/// the latest published version of every package on the npm registry and
/// reports which packages are up to date and which have newer versions.
///
/// A plain text summary is always printed to stdout. Report files are
/// written to <OUTPUT DIR>/npmVersions/report.<ext> unless overridden.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the package.json to check
    #[arg(long, value_name = "FILE", default_value = "package.json")]
    manifest: PathBuf,

    /// Base URL of the npm registry
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY_URL)]
    registry: String,

    /// Directory report files are written under
    #[arg(long, value_name = "DIR", default_value = "build")]
    output_dir: PathBuf,

    /// Skip writing the plain text report file
    #[arg(long)]
    no_text: bool,

    /// Write the JSON report
    #[arg(long)]
    json: bool,

    /// Write the HTML report
    #[arg(long)]
    html: bool,

    /// Write the XML report
    #[arg(long)]
    xml: bool,

    /// Write the plain text report to FILE instead of the default location
    #[arg(long, value_name = "FILE")]
    text_output: Option<PathBuf>,

    /// Write the JSON report to FILE (implies --json)
    #[arg(long, value_name = "FILE")]
    json_output: Option<PathBuf>,

    /// Write the HTML report to FILE (implies --html)
    #[arg(long, value_name = "FILE")]
    html_output: Option<PathBuf>,

    /// Write the XML report to FILE (implies --xml)
    #[arg(long, value_name = "FILE")]
    xml_output: Option<PathBuf>,
}

impl Cli {
    /// Builds the report configuration from the flags
    ///
    /// An explicit output path enables its report even when the matching
    /// toggle is absent.
    fn reports_config(&self) -> ReportsConfig {
        let mut config = ReportsConfig::new(&self.output_dir);
        config.plain_text.enabled = !self.no_text;
        config.json.enabled = self.json;
        config.html.enabled = self.html;
        config.xml.enabled = self.xml;

        let overrides = [
            (ReportKind::PlainText, &self.text_output),
            (ReportKind::Json, &self.json_output),
            (ReportKind::Html, &self.html_output),
            (ReportKind::Xml, &self.xml_output),
        ];
        for (kind, output) in overrides {
            if let Some(output) = output {
                let report = config.get_mut(kind);
                report.enabled = true;
                report.output = output.clone();
            }
        }

        config
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let dependencies = read_dependencies(&cli.manifest)
        .with_context(|| format!("Failed to read {}", cli.manifest.display()))?;
    let registry = NpmRegistry::new(&cli.registry);
    let checked = check_packages(&registry, dependencies).await;
    write_reports(&checked, &cli.reports_config())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
