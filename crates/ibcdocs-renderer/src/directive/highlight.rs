//! `highlight-box` and `highlight-tag` directives.
//!
//! ```markdown
//! :::highlight-box[Synopsis]{type="synopsis"}
//! Learn how callbacks are metered.
//! :::
//!
//! Available since :highlight-tag[v10]{type="ibc-go"}.
//! ```

use super::{
    ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective,
    LeafDirective,
};
use crate::markers::{self, BOX_MARKER, TAG_MARKER};

/// `:::highlight-box[Title]{type="…"}` container.
///
/// Bracket content is the title and wins over a `title` attribute.
#[derive(Debug, Default)]
pub struct HighlightBoxDirective;

impl ContainerDirective for HighlightBoxDirective {
    fn name(&self) -> &str {
        "highlight-box"
    }

    fn start(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        let attrs = marker_attrs(&args, "title");
        // Blank lines keep the marker a standalone HTML block.
        DirectiveOutput::html(format!("\n{}\n", markers::open(BOX_MARKER, &attrs)))
    }

    fn end(&mut self, _ctx: &DirectiveContext) -> Option<String> {
        Some(format!("\n{}\n", markers::close(BOX_MARKER)))
    }
}

/// `:highlight-tag[version]{type="…"}` inline and `::highlight-tag` leaf.
///
/// Bracket content is the version and wins over a `version` attribute.
#[derive(Debug, Default)]
pub struct HighlightTagDirective;

impl InlineDirective for HighlightTagDirective {
    fn name(&self) -> &str {
        "highlight-tag"
    }

    fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        let attrs = marker_attrs(&args, "version");
        DirectiveOutput::html(markers::self_closing(TAG_MARKER, &attrs))
    }
}

impl LeafDirective for HighlightTagDirective {
    fn name(&self) -> &str {
        "highlight-tag"
    }

    fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        let attrs = marker_attrs(&args, "version");
        DirectiveOutput::html(format!(
            "\n{}\n",
            markers::self_closing(TAG_MARKER, &attrs)
        ))
    }
}

/// Sorted attributes with non-empty bracket content stored under `content_key`.
fn marker_attrs<'a>(args: &'a DirectiveArgs, content_key: &'a str) -> Vec<(&'a str, &'a str)> {
    let mut attrs: Vec<_> = args
        .sorted_attrs()
        .into_iter()
        .filter(|(k, _)| args.content.is_empty() || *k != content_key)
        .collect();
    if !args.content.is_empty() {
        attrs.push((content_key, args.content.as_str()));
        attrs.sort_unstable();
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CTX: DirectiveContext<'static> = DirectiveContext {
        source_path: None,
        line: 1,
    };

    #[test]
    fn test_box_start_and_end() {
        let mut dir = HighlightBoxDirective;
        let out = dir.start(DirectiveArgs::parse("Synopsis", r#"type="synopsis""#), &CTX);
        assert_eq!(
            out,
            DirectiveOutput::html(
                "\n<ibc-highlight-box title=\"Synopsis\" type=\"synopsis\">\n"
            )
        );
        assert_eq!(
            dir.end(&CTX).as_deref(),
            Some("\n</ibc-highlight-box>\n")
        );
    }

    #[test]
    fn test_box_title_attribute() {
        let mut dir = HighlightBoxDirective;
        let out = dir.start(DirectiveArgs::parse("", r#"type="tip" title="Fees""#), &CTX);
        assert_eq!(
            out,
            DirectiveOutput::html("\n<ibc-highlight-box title=\"Fees\" type=\"tip\">\n")
        );
    }

    #[test]
    fn test_box_brackets_win_over_title_attr() {
        let mut dir = HighlightBoxDirective;
        let out = dir.start(DirectiveArgs::parse("Bracket", r#"title="Attr""#), &CTX);
        let DirectiveOutput::Html(html) = out else {
            panic!("expected html");
        };
        assert!(html.contains(r#"title="Bracket""#));
        assert!(!html.contains("Attr"));
    }

    #[test]
    fn test_inline_tag_version_from_brackets() {
        let mut dir = HighlightTagDirective;
        let out = InlineDirective::process(
            &mut dir,
            DirectiveArgs::parse("v10", r#"type="concepts""#),
            &CTX,
        );
        assert_eq!(
            out,
            DirectiveOutput::html(r#"<ibc-highlight-tag type="concepts" version="v10"/>"#)
        );
    }

    #[test]
    fn test_leaf_tag_is_block() {
        let mut dir = HighlightTagDirective;
        let out = LeafDirective::process(&mut dir, DirectiveArgs::parse("", "type=devops"), &CTX);
        assert_eq!(
            out,
            DirectiveOutput::html("\n<ibc-highlight-tag type=\"devops\"/>\n")
        );
    }
}
