//! XML report
//!
//! Attribute insertion order is part of the wire format; consumers diff the
//! report files byte for byte.

use std::io::Write;

use crate::check::types::CheckedPackages;
use crate::config::ReportKind;
use crate::report::markup::Element;
use crate::report::{PackageRenderer, ReportError};

const XML_PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

pub struct XmlRenderer;

impl XmlRenderer {
    fn document(packages: &CheckedPackages) -> Element {
        let mut latest = Element::new("latest");
        for package in &packages.latest {
            latest = latest.child(
                Element::new("package")
                    .attr("currentVersion", &package.current_version)
                    .text(&package.name),
            );
        }

        let mut outdated = Element::new("outdated");
        for package in &packages.outdated {
            outdated = outdated.child(
                Element::new("package")
                    .attr("latestVersion", &package.available_version)
                    .attr("currentVersion", &package.current_version)
                    .text(&package.name),
            );
        }

        Element::new("packages")
            .attr("xmlns", "https://www.cmgapps.com")
            .attr(
                "xsi:schemaLocation",
                "https://www.cmgapps.com https://www.cmgapps.com/xsd/packages.xsd",
            )
            .attr("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
            .child(latest)
            .child(outdated)
    }
}

impl PackageRenderer for XmlRenderer {
    fn kind(&self) -> ReportKind {
        ReportKind::Xml
    }

    fn write_packages(
        &self,
        packages: &CheckedPackages,
        out: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let mut xml = String::from(XML_PROLOG);
        xml.push_str(&Self::document(packages).render());
        out.write_all(xml.as_bytes())?;
        Ok(())
    }
}
