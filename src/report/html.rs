//! HTML report
//!
//! The style sheets are compiled into the binary so the report is a single
//! self-contained file.

use std::io::Write;

use crate::check::types::CheckedPackages;
use crate::config::ReportKind;
use crate::report::markup::Element;
use crate::report::{PackageRenderer, ReportError};

const NORMALIZE_CSS: &str = include_str!("../../resources/normalize.css");
const STYLE_CSS: &str = include_str!("../../resources/style.css");

pub struct HtmlRenderer;

impl HtmlRenderer {
    fn document(packages: &CheckedPackages) -> Element {
        let head = Element::new("head")
            .child(Element::new("title").text("NPM Versions"))
            .child(Element::new("style").text(NORMALIZE_CSS))
            .child(Element::new("style").text(STYLE_CSS));

        let mut body = Element::new("body").child(Element::new("h1").text("NPM Versions"));

        if !packages.latest.is_empty() {
            let mut table = Element::new("table");
            for package in &packages.latest {
                table = table.child(
                    Element::new("tr")
                        .child(Element::new("td").text(&package.name))
                        .child(Element::new("td").text(&package.current_version)),
                );
            }
            body = body
                .child(
                    Element::new("p")
                        .text("The following packages are using the latest version"),
                )
                .child(table);
        }

        if !packages.outdated.is_empty() {
            let mut table = Element::new("table");
            for package in &packages.outdated {
                table = table.child(
                    Element::new("tr")
                        .child(Element::new("td").text(&package.name))
                        .child(Element::new("td").text(format!(
                            "{} &rarr; {}",
                            package.current_version, package.available_version
                        ))),
                );
            }
            body = body
                .child(Element::new("p").text("The following packages have updated versions"))
                .child(table);
        }

        body = body.child(
            Element::new("p").attr("style", "text-align:right").child(
                Element::new("small").text("Generated with ").child(
                    Element::new("a")
                        .attr("href", "https://crates.io/crates/npm-versions")
                        .inline()
                        .text("npm-versions"),
                ),
            ),
        );

        Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body)
    }
}

impl PackageRenderer for HtmlRenderer {
    fn kind(&self) -> ReportKind {
        ReportKind::Html
    }

    fn write_packages(
        &self,
        packages: &CheckedPackages,
        out: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&Self::document(packages).render());
        out.write_all(html.as_bytes())?;
        Ok(())
    }
}
