//! Intermediate HTML markers emitted by directives.
//!
//! Directive preprocessing replaces `:::highlight-box` and
//! `:highlight-tag` with `ibc-*` tags that pulldown-cmark passes through as
//! raw HTML. The tree builder recognizes them and turns them back into
//! component elements.

use crate::components::{HIGHLIGHT_BOX_TAG, HIGHLIGHT_TAG_TAG};
use crate::directive::DirectiveArgs;
use crate::node::{escape_html, unescape_html};

/// Marker tag for a highlight box.
pub(crate) const BOX_MARKER: &str = "ibc-highlight-box";

/// Marker tag for a highlight tag.
pub(crate) const TAG_MARKER: &str = "ibc-highlight-tag";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MarkerKind {
    Open,
    Close,
    SelfClosing,
}

/// A recognized marker tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Marker {
    pub kind: MarkerKind,
    /// Component tag the marker stands for.
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
}

/// `<name a="v">`
pub(crate) fn open(name: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{name}{}>", write_attrs(attrs))
}

/// `</name>`
pub(crate) fn close(name: &str) -> String {
    format!("</{name}>")
}

/// `<name a="v"/>`
pub(crate) fn self_closing(name: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{name}{}/>", write_attrs(attrs))
}

fn write_attrs(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{}""#, escape_html(v)))
        .collect()
}

fn component_tag(name: &str) -> Option<&'static str> {
    match name {
        BOX_MARKER => Some(HIGHLIGHT_BOX_TAG),
        TAG_MARKER => Some(HIGHLIGHT_TAG_TAG),
        _ => None,
    }
}

/// Recognize a single marker tag, ignoring surrounding whitespace.
pub(crate) fn parse(html: &str) -> Option<Marker> {
    let inner = html.trim().strip_prefix('<')?.strip_suffix('>')?;

    if let Some(name) = inner.strip_prefix('/') {
        return Some(Marker {
            kind: MarkerKind::Close,
            tag: component_tag(name.trim())?,
            attrs: Vec::new(),
        });
    }

    let (inner, kind) = match inner.strip_suffix('/') {
        Some(rest) => (rest, MarkerKind::SelfClosing),
        None => (inner, MarkerKind::Open),
    };
    let name_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
    let tag = component_tag(&inner[..name_end])?;

    let args = DirectiveArgs::parse("", &inner[name_end..]);
    let attrs = args
        .sorted_attrs()
        .into_iter()
        .map(|(k, v)| (k.to_owned(), unescape_html(v)))
        .collect();

    Some(Marker { kind, tag, attrs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_roundtrip_with_escaping() {
        let html = open(BOX_MARKER, &[("title", r#"Gas "limits" & fees"#), ("type", "warning")]);
        assert_eq!(
            html,
            r#"<ibc-highlight-box title="Gas &quot;limits&quot; &amp; fees" type="warning">"#
        );

        let marker = parse(&html).unwrap();
        assert_eq!(marker.kind, MarkerKind::Open);
        assert_eq!(marker.tag, "highlight-box");
        assert_eq!(
            marker.attrs,
            vec![
                ("title".to_owned(), r#"Gas "limits" & fees"#.to_owned()),
                ("type".to_owned(), "warning".to_owned()),
            ]
        );
    }

    #[test]
    fn test_close() {
        let marker = parse("\n</ibc-highlight-box>\n").unwrap();
        assert_eq!(marker.kind, MarkerKind::Close);
        assert_eq!(marker.tag, "highlight-box");
    }

    #[test]
    fn test_self_closing_tag() {
        let html = self_closing(TAG_MARKER, &[("type", "concepts"), ("version", "v10")]);
        assert_eq!(html, r#"<ibc-highlight-tag type="concepts" version="v10"/>"#);
        let marker = parse(&html).unwrap();
        assert_eq!(marker.kind, MarkerKind::SelfClosing);
        assert_eq!(marker.tag, "highlight-tag");
        assert_eq!(marker.attrs.len(), 2);
    }

    #[test]
    fn test_self_closing_without_attrs() {
        let marker = parse("<ibc-highlight-tag/>").unwrap();
        assert_eq!(marker.kind, MarkerKind::SelfClosing);
        assert!(marker.attrs.is_empty());
    }

    #[test]
    fn test_other_html_not_marker() {
        assert!(parse("<div>").is_none());
        assert!(parse("</div>").is_none());
        assert!(parse("<ibc-highlight-box>text</ibc-highlight-box>").is_none());
        assert!(parse("plain").is_none());
    }
}
