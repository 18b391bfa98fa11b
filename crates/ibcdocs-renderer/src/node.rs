//! Document node model and HTML serialization.
//!
//! Components consume and produce [`Node`] trees instead of strings so that
//! renderers can inspect their children (tag names, attributes) before the
//! tree is serialized with [`Node::write_html`].

use std::fmt;

/// Elements that have no closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in a rendered document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element with tag, attributes, style and children.
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted HTML emitted verbatim.
    Raw(String),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a raw HTML node.
    #[must_use]
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Borrow the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Whether this node is an element with the given tag.
    #[must_use]
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|el| el.tag == tag)
    }

    /// Plain text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Self::Text(text) => out.push_str(text),
            Self::Raw(_) => {}
        }
    }

    /// Serialize this node as HTML into `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(el) => el.write_html(out),
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Raw(html) => out.push_str(html),
        }
    }

    /// Serialize this node as an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Serialize a sequence of nodes as HTML.
#[must_use]
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::with_capacity(4096);
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

/// An HTML element.
///
/// Attributes keep insertion order; the `style` attribute is always written
/// last from [`Element::style`].
///
/// # Example
///
/// ```
/// use ibcdocs_renderer::{Element, Node};
///
/// let link = Element::new("a")
///     .with_attr("href", "https://ibc.cosmos.network")
///     .with_style("color", "#FFFFFF")
///     .with_child(Node::text("IBC"));
///
/// assert_eq!(
///     Node::from(link).to_html(),
///     r#"<a href="https://ibc.cosmos.network" style="color:#FFFFFF">IBC</a>"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g., "div", "a", "highlight-box").
    pub tag: String,
    attrs: Vec<(String, String)>,
    /// Inline CSS declarations.
    pub style: Style,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an attribute, returning the element.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a style declaration, returning the element.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    /// Append a child, returning the element.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children, returning the element.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set an attribute, replacing an existing value in place.
    ///
    /// Setting `style` parses the value into [`Element::style`].
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == "style" {
            self.style = Style::parse(&value);
            return;
        }
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove an attribute and return its value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(idx).1)
    }

    /// Iterate over attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Whether this element has the given tag.
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        if !self.style.is_empty() {
            write_attr(out, "style", &self.style.to_string());
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Ordered inline CSS declarations.
///
/// Setting an existing property replaces its value without moving it.
///
/// ```
/// use ibcdocs_renderer::Style;
///
/// let mut style = Style::default();
/// style.set("color", "#000000");
/// style.set("padding", "1rem");
/// style.set("color", "#FFFFFF");
/// assert_eq!(style.to_string(), "color:#FFFFFF;padding:1rem");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    /// Parse a `prop: value; prop: value` string.
    ///
    /// Declarations without a colon are ignored.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let mut style = Self::default();
        for decl in css.split(';') {
            if let Some((prop, value)) = decl.split_once(':') {
                let prop = prop.trim();
                if !prop.is_empty() {
                    style.set(prop, value.trim());
                }
            }
        }
        style
    }

    /// Set a declaration.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((property, value)),
        }
    }

    /// Get a declaration value.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Apply `other` on top of this style; its values win.
    pub fn merge(&mut self, other: &Style) {
        for (prop, value) in &other.decls {
            self.set(prop.clone(), value.clone());
        }
    }

    /// Whether there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (prop, value)) in self.decls.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{prop}:{value}")?;
        }
        Ok(())
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Reverse [`escape_html`].
#[must_use]
pub fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
