//! Highlight tag: an inline category badge.

use super::{Component, RenderContext};
use crate::node::{Element, Node};
use crate::styles::tag_style;
use crate::theme::Theme;

/// Tag name the highlight tag is registered under.
pub const HIGHLIGHT_TAG_TAG: &str = "highlight-tag";

/// Renders `<highlight-tag type="…" version="…"/>` as a colored badge.
///
/// ```
/// use ibcdocs_renderer::{Component, Element, HighlightTag, RenderContext, Theme};
///
/// let theme = Theme::default();
/// let mut cx = RenderContext::new(&theme);
/// let el = Element::new("highlight-tag")
///     .with_attr("type", "concepts")
///     .with_attr("version", "v10");
///
/// assert_eq!(
///     HighlightTag.render(el, &mut cx).to_html(),
///     r#"<span class="highlight-tag" style="background-color:#AABAFF;color:#000000">Concept v10</span>"#
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HighlightTag;

impl Component for HighlightTag {
    fn render(&self, element: Element, cx: &mut RenderContext<'_>) -> Node {
        let kind = element.attr("type").unwrap_or_default();
        let found = tag_style(kind);
        if found.fallback {
            cx.warn(format!(
                "unknown highlight-tag type '{kind}', using '{}'",
                found.key
            ));
        }
        let style = found.style;

        let label = match element.attr("version") {
            Some(version) if !version.is_empty() => format!("{} {version}", style.label),
            _ => style.label.to_owned(),
        };

        Element::new("span")
            .with_attr("class", "highlight-tag")
            .with_style("background-color", style.color)
            .with_style("color", Theme::text_color(!style.bright))
            .with_child(Node::text(label))
            .into()
    }
}
