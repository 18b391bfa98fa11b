//! Markdown page pipeline.

use std::path::Path;

use crate::components::{Components, RenderContext};
use crate::directive::{DirectiveProcessor, HighlightBoxDirective, HighlightTagDirective};
use crate::front_matter::FrontMatter;
use crate::node::{Node, render_nodes};
use crate::theme::Theme;
use crate::tree::{TocEntry, build_tree};

/// Result of rendering one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Front matter `title`, else the first H1.
    pub title: Option<String>,
    pub description: Option<String>,
    pub toc: Vec<TocEntry>,
    /// Soft problems found while rendering.
    pub warnings: Vec<String>,
}

/// Renders Markdown pages through directives, the node tree and components.
///
/// One renderer can be shared between threads; each call to
/// [`render`](Self::render) uses its own directive and component state.
///
/// ```
/// use ibcdocs_renderer::{Components, PageRenderer, Theme};
///
/// let renderer = PageRenderer::new(Components::defaults(), Theme::default());
/// let result = renderer.render("# Relayers\n\nSince :highlight-tag[v8]{type=\"ibc-go\"}.", None);
///
/// assert_eq!(result.title.as_deref(), Some("Relayers"));
/// assert!(result.html.contains(r#"<span class="highlight-tag""#));
/// assert!(result.warnings.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct PageRenderer {
    components: Components,
    theme: Theme,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(Components::defaults(), Theme::default())
    }
}

impl PageRenderer {
    #[must_use]
    pub fn new(components: Components, theme: Theme) -> Self {
        Self { components, theme }
    }

    #[must_use]
    pub fn components(&self) -> &Components {
        &self.components
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render `markdown`. `source_path` only prefixes warning locations.
    #[must_use]
    pub fn render(&self, markdown: &str, source_path: Option<&Path>) -> PageRenderResult {
        let mut processor = DirectiveProcessor::new()
            .with_container(HighlightBoxDirective)
            .with_inline(HighlightTagDirective)
            .with_leaf(HighlightTagDirective);
        if let Some(path) = source_path {
            processor = processor.with_source_path(path);
        }
        let processed = processor.process(markdown);
        let mut warnings = processor.warnings();

        let tree = build_tree(&processed);
        let front_matter = match tree.front_matter.as_deref().map(FrontMatter::parse) {
            Some(Ok(fm)) => fm,
            Some(Err(e)) => {
                warnings.push(with_location(
                    source_path,
                    &format!("invalid front matter: {e}"),
                ));
                FrontMatter::default()
            }
            None => FrontMatter::default(),
        };

        let mut nodes = tree.nodes;
        if let Some(tags) = front_matter.tags_element() {
            nodes.insert(0, Node::from(tags));
        }

        let mut cx = RenderContext::new(&self.theme);
        let nodes = self.components.expand_all(nodes, &mut cx);
        warnings.extend(
            cx.into_warnings()
                .into_iter()
                .map(|w| with_location(source_path, &w)),
        );

        let title = front_matter.title.or(tree.title);
        tracing::debug!(
            path = ?source_path,
            title = ?title,
            toc = tree.toc.len(),
            warnings = warnings.len(),
            "Rendered page"
        );

        PageRenderResult {
            html: render_nodes(&nodes),
            title,
            description: front_matter.description,
            toc: tree.toc,
            warnings,
        }
    }
}

fn with_location(source_path: Option<&Path>, message: &str) -> String {
    match source_path {
        Some(path) => format!("{}: {message}", path.display()),
        None => message.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> PageRenderResult {
        PageRenderer::default().render(markdown, None)
    }

    #[test]
    fn test_box_with_title_and_link() {
        let result = render(
            ":::highlight-box[Heads up]{type=\"warning\"}\nSee [docs](https://ibc.cosmos.network).\n:::\n",
        );
        assert!(result.html.contains("highlight-box highlight-box-warning"));
        assert!(result.html.contains(r#"<span class="highlight-box-title">Heads up</span>"#));
        assert!(result.html.contains("https://ibc.cosmos.network"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_nested_boxes_render() {
        let result = render(
            ":::highlight-box{type=\"tip\"}\nOuter\n\n:::highlight-box{type=\"note\"}\nInner\n:::\n:::\n",
        );
        assert_eq!(result.html.matches("highlight-box-content").count(), 2);
        assert!(result.html.contains("highlight-box-tip"));
        assert!(result.html.contains("highlight-box-note"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_directives_in_fence_untouched() {
        let result = render("```md\n:::highlight-box{type=\"tip\"}\n:::\n```\n");
        assert!(!result.html.contains("highlight-box-tip"));
        assert!(result.html.contains(":::highlight-box{type=&quot;tip&quot;}"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unknown_box_key_warns_with_path() {
        let result = PageRenderer::default().render(
            ":::highlight-box{type=\"unknown-key\"}\nx\n:::\n",
            Some(Path::new("docs/intro.md")),
        );
        assert!(result.html.contains("highlight-box-info"));
        assert_eq!(
            result.warnings,
            vec!["docs/intro.md: unknown highlight-box type 'unknown-key', using 'info'"]
        );
    }

    #[test]
    fn test_code_block_source_link() {
        let result =
            render("```go source=\"https://github.com/cosmos/ibc-go/blob/main/x.go\"\nfunc X() {}\n```\n");
        assert!(result.html.contains(r#"<code class="language-go">"#));
        assert!(result.html.contains(
            r#"<a href="https://github.com/cosmos/ibc-go/blob/main/x.go" target="_blank" rel="noopener noreferrer">View Source</a>"#
        ));
    }

    #[test]
    fn test_front_matter_title_wins_and_tags_rendered() {
        let result = render(
            "---\ntitle: Channel Upgrades\ndescription: Upgrade channels\ntags:\n  - type: concepts\n    version: v8\n---\n\n# Upgrades\n",
        );
        assert_eq!(result.title.as_deref(), Some("Channel Upgrades"));
        assert_eq!(result.description.as_deref(), Some("Upgrade channels"));
        assert!(result.html.starts_with(r#"<div class="page-tags"><span class="highlight-tag""#));
        assert!(result.html.contains("Concept v8"));
    }

    #[test]
    fn test_h1_title_without_front_matter() {
        let result = render("# Light Clients\n\n## Tendermint\n");
        assert_eq!(result.title.as_deref(), Some("Light Clients"));
        assert_eq!(result.toc.len(), 1);
        assert_eq!(result.toc[0].id, "tendermint");
    }

    #[test]
    fn test_malformed_front_matter_is_warning() {
        let result = render("---\ntags: [unclosed\n---\n\nBody\n");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("invalid front matter:"));
        assert!(result.html.contains("<p>Body</p>"));
    }

    #[test]
    fn test_override_component_used() {
        let overrides = Components::empty().with(
            "highlight-tag",
            |el: Element, _cx: &mut RenderContext<'_>| {
                Node::from(Element::new("mark").with_attr("data-type", el.attr("type").unwrap_or("")))
            },
        );
        let renderer = PageRenderer::new(
            Components::merge(&Components::defaults(), overrides, false),
            Theme::default(),
        );
        let result = renderer.render("Since :highlight-tag{type=\"devops\"}", None);
        assert_eq!(result.html, r#"<p>Since <mark data-type="devops"></mark></p>"#);
    }

    #[test]
    fn test_inline_code_at_line_start_does_not_hide_directives() {
        let result = render(
            "```npm install``` sets things up.\n\n:::highlight-box{type=\"tip\"}\nBody\n:::\n",
        );
        assert!(result.html.starts_with("<p><code>npm install</code> sets things up.</p>"));
        assert!(result.html.contains("highlight-box-tip"));
        assert!(!result.html.contains(":::"));
    }

    #[test]
    fn test_box_inside_list_item() {
        let result = render(
            "- item\n\n  :::highlight-box{type=\"tip\"}\n  body [l](/x)\n  :::\n- next\n",
        );
        let html = &result.html;
        assert_eq!(html.matches("<ul>").count(), 1);
        assert!(html.ends_with("</ul>"));
        let box_at = html.find("highlight-box-tip").unwrap();
        assert!(box_at < html.find("</li>").unwrap());
        assert!(html.contains(r#"<a href="/x">l</a>"#));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_fence_info_keys_cannot_inject_markup() {
        let result = render("```js x><script>alert(1)</script><y=\"1\"\nlet a;\n```\n");
        assert!(!result.html.contains("<script>"));
        assert!(result.html.contains(r#"<pre data-y="1"><code class="language-js">"#));
    }

    #[test]
    fn test_directive_warnings_collected() {
        let result = render("text\n\n:::\n");
        assert_eq!(result.warnings, vec!["line 3: stray ::: with no opening directive"]);
    }
}
