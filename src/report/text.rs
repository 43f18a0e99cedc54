//! Plain text report

use std::io::Write;

use crate::check::types::CheckedPackages;
use crate::config::ReportKind;
use crate::report::{PackageRenderer, ReportError};

pub struct TextRenderer;

impl PackageRenderer for TextRenderer {
    fn kind(&self) -> ReportKind {
        ReportKind::PlainText
    }

    fn write_packages(
        &self,
        packages: &CheckedPackages,
        out: &mut dyn Write,
    ) -> Result<(), ReportError> {
        writeln!(out, "┌──────────────┐")?;
        writeln!(out, "│ NPM Packages │")?;
        writeln!(out, "└──────────────┘")?;
        writeln!(out)?;

        if !packages.latest.is_empty() {
            writeln!(out, "The following packages are using the latest version:")?;
            for package in &packages.latest {
                writeln!(out, " • {}:{}", package.name, package.current_version)?;
            }
        }

        if !packages.outdated.is_empty() {
            // separator between the two sections
            if !packages.latest.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "The following packages have updated versions:")?;
            for package in &packages.outdated {
                writeln!(
                    out,
                    " • {} [{} -> {}]",
                    package.name, package.current_version, package.available_version
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{latest_package, outdated_package, render};

    #[test]
    fn prints_the_header_for_an_empty_result() {
        let output = render(&TextRenderer, &CheckedPackages::default());

        assert_eq!(
            output,
            r#"┌──────────────┐
│ NPM Packages │
└──────────────┘

"#
        );
    }

    #[test]
    fn prints_latest_then_outdated() {
        let packages = CheckedPackages {
            outdated: vec![outdated_package()],
            latest: vec![latest_package()],
        };

        let output = render(&TextRenderer, &packages);

        assert_eq!(
            output,
            r#"┌──────────────┐
│ NPM Packages │
└──────────────┘

The following packages are using the latest version:
 • latest list:1.0.0

The following packages have updated versions:
 • outdated lib [1.0.0 -> 2.0.0]
"#
        );
    }

    #[test]
    fn prints_outdated_only() {
        let packages = CheckedPackages {
            outdated: vec![outdated_package()],
            latest: vec![],
        };

        let output = render(&TextRenderer, &packages);

        assert_eq!(
            output,
            r#"┌──────────────┐
│ NPM Packages │
└──────────────┘

The following packages have updated versions:
 • outdated lib [1.0.0 -> 2.0.0]
"#
        );
    }

    #[test]
    fn prints_latest_only() {
        let packages = CheckedPackages {
            outdated: vec![],
            latest: vec![latest_package()],
        };

        let output = render(&TextRenderer, &packages);

        assert_eq!(
            output,
            r#"┌──────────────┐
│ NPM Packages │
└──────────────┘

The following packages are using the latest version:
 • latest list:1.0.0
"#
        );
    }
}
