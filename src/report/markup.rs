//! Markup tree shared by the HTML and XML renderers
//!
//! Documents are assembled with consuming builder calls and serialized in one
//! pass. Text is emitted verbatim; callers escape where their format needs
//! it. Attribute and child order is insertion order, so rendering the same
//! tree always yields the same bytes.

use indexmap::IndexMap;

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes and child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attributes: IndexMap<&'static str, String>,
    children: Vec<Node>,
    inline: bool,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
            inline: false,
        }
    }

    /// Adds an attribute; a repeated name overwrites in place
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    /// Appends a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a text node
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Renders all children on the opening line, without indentation
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Serializes the tree rooted at this element
    ///
    /// Nesting is indented by two spaces per level and every line ends with a
    /// newline. Elements without children self-close.
    pub fn render(&self) -> String {
        let mut buf = String::new();
        self.render_into(&mut buf, 0, true);
        buf
    }

    fn render_into(&self, buf: &mut String, depth: usize, format: bool) {
        if format {
            push_indent(buf, depth);
        }
        buf.push('<');
        buf.push_str(self.name);
        for (name, value) in &self.attributes {
            buf.push(' ');
            buf.push_str(name);
            buf.push_str("=\"");
            buf.push_str(value);
            buf.push('"');
        }

        if self.children.is_empty() {
            buf.push_str("/>");
            if format {
                buf.push('\n');
            }
            return;
        }

        buf.push('>');
        if self.inline {
            for child in &self.children {
                child.render_into(buf, 0, false);
            }
        } else {
            if format {
                buf.push('\n');
            }
            for child in &self.children {
                child.render_into(buf, depth + 1, format);
            }
            if format {
                push_indent(buf, depth);
            }
        }
        buf.push_str("</");
        buf.push_str(self.name);
        buf.push('>');
        if format {
            buf.push('\n');
        }
    }
}

impl Node {
    fn render_into(&self, buf: &mut String, depth: usize, format: bool) {
        match self {
            Node::Element(element) => element.render_into(buf, depth, format),
            Node::Text(text) => {
                if format {
                    push_indent(buf, depth);
                }
                buf.push_str(text);
                if format {
                    buf.push('\n');
                }
            }
        }
    }
}

fn push_indent(buf: &mut String, depth: usize) {
    for _ in 0..depth {
        buf.push_str("  ");
    }
}
