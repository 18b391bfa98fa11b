//! Highlight box: a titled callout with a category gradient.

use super::{Component, RenderContext};
use crate::node::{Element, Node};
use crate::styles::box_style;
use crate::theme::Theme;

/// Tag name the highlight box is registered under.
pub const HIGHLIGHT_BOX_TAG: &str = "highlight-box";

/// Renders `<highlight-box type="…" title="…">children</highlight-box>`.
///
/// Direct `a` children get the link color and direct inline `code`
/// children get the theme's code background. Deeper descendants and all
/// other children are left as they are.
///
/// ```
/// use ibcdocs_renderer::{Component, Element, HighlightBox, Node, RenderContext, Theme};
///
/// let theme = Theme::default();
/// let mut cx = RenderContext::new(&theme);
/// let el = Element::new("highlight-box")
///     .with_attr("type", "unknown-key")
///     .with_attr("title", "X");
///
/// let html = HighlightBox.render(el, &mut cx).to_html();
/// assert!(html.contains("linear-gradient(90deg, #336667, #00B067)"));
/// assert_eq!(cx.warnings().len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HighlightBox;

impl Component for HighlightBox {
    fn render(&self, element: Element, cx: &mut RenderContext<'_>) -> Node {
        let kind = element.attr("type").unwrap_or_default();
        let found = box_style(kind);
        if found.fallback {
            cx.warn(format!(
                "unknown highlight-box type '{kind}', using '{}'",
                found.key
            ));
        }
        let style = found.style;
        let text_color = Theme::text_color(style.dark_mode);
        let link_color = cx
            .theme
            .link_color
            .clone()
            .unwrap_or_else(|| text_color.to_owned());
        let code_background = cx.theme.code_background();

        let mut header = Element::new("div")
            .with_attr("class", "highlight-box-header")
            .with_child(
                Element::new("img")
                    .with_attr("class", "highlight-box-icon")
                    .with_attr("src", style.icon)
                    .with_attr("alt", "")
                    .with_style("filter", icon_filter(style.dark_mode)),
            );
        let title = element.attr("title").unwrap_or_default();
        if !title.is_empty() {
            header = header.with_child(
                Element::new("span")
                    .with_attr("class", "highlight-box-title")
                    .with_child(Node::text(title)),
            );
        }

        let body = Element::new("div")
            .with_attr("class", "highlight-box-content")
            .with_children(element.children.into_iter().map(|child| {
                style_direct_child(child, &link_color, &code_background)
            }));

        Element::new("div")
            .with_attr("class", format!("highlight-box highlight-box-{}", found.key))
            .with_style(
                "background",
                format!(
                    "linear-gradient({}, {}, {})",
                    cx.theme.gradient_angle, style.color1, style.color2
                ),
            )
            .with_style("color", text_color)
            .with_child(header)
            .with_child(body)
            .into()
    }
}

/// CSS filter that renders a monochrome icon light or dark.
fn icon_filter(dark_mode: bool) -> &'static str {
    if dark_mode {
        "brightness(0) invert(1)"
    } else {
        "brightness(0)"
    }
}

fn style_direct_child(child: Node, link_color: &str, code_background: &str) -> Node {
    match child {
        Node::Element(mut el) if el.is("a") => {
            el.style.set("color", link_color);
            Node::Element(el)
        }
        Node::Element(mut el) if el.is("code") => {
            el.style.set("background-color", code_background);
            Node::Element(el)
        }
        other => other,
    }
}
