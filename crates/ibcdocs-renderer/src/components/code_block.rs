//! Code block wrapper with an optional "View Source" link.

use super::{Component, RenderContext};
use crate::node::{Element, Node};

/// Tag name the code block is registered under.
pub const CODE_BLOCK_TAG: &str = "code-block";

/// Reserved property holding the source URL.
const SOURCE_PROP: &str = "source";

/// Property holding the code language.
const LANGUAGE_PROP: &str = "language";

/// Renders `<code-block language="go" source="…">code</code-block>`.
///
/// The code is the text content of the element. Every property except
/// `source` and `language` becomes a `data-*` attribute of the `pre`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeBlock;

impl Component for CodeBlock {
    fn render(&self, mut element: Element, _cx: &mut RenderContext<'_>) -> Node {
        let source = element.remove_attr(SOURCE_PROP).unwrap_or_default();
        let language = element.remove_attr(LANGUAGE_PROP).unwrap_or_default();
        let code: String = element.children.iter().map(Node::text_content).collect();

        let mut code_el = Element::new("code");
        if !language.is_empty() {
            code_el.set_attr("class", format!("language-{language}"));
        }
        let code_el = code_el.with_child(Node::text(code));

        let mut pre = Element::new("pre");
        for (name, value) in element.attrs() {
            pre.set_attr(format!("data-{name}"), value);
        }
        let pre = pre.with_child(code_el);

        let mut wrapper = Element::new("div")
            .with_attr("class", "code-block")
            .with_child(pre);
        if !source.is_empty() {
            wrapper = wrapper.with_child(source_link(&source));
        }
        wrapper.into()
    }
}

fn source_link(url: &str) -> Element {
    Element::new("div")
        .with_attr("class", "code-block-source")
        .with_style("text-align", "right")
        .with_child(
            Element::new("a")
                .with_attr("href", url)
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer")
                .with_child(Node::text("View Source")),
        )
}
