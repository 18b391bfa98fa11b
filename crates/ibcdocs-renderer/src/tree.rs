//! Markdown to node tree.
//!
//! Walks pulldown-cmark events and builds a [`Node`] tree. Fenced code
//! blocks become `code-block` elements and directive markers become
//! `highlight-box` / `highlight-tag` elements, so that components can be
//! applied to them afterwards.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::{
    Alignment, BlockQuoteKind, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};

use crate::components::CODE_BLOCK_TAG;
use crate::directive::DirectiveArgs;
use crate::markers::{self, Marker, MarkerKind};
use crate::node::{Element, Node};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (2 or 3).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// Output of [`build_tree`].
#[derive(Debug, Default)]
pub(crate) struct Tree {
    pub nodes: Vec<Node>,
    /// Text of the first H1.
    pub title: Option<String>,
    pub toc: Vec<TocEntry>,
    /// Raw YAML of a leading `---` metadata block.
    pub front_matter: Option<String>,
}

pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Parse Markdown (already directive-processed) into a node tree.
pub(crate) fn build_tree(markdown: &str) -> Tree {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(markdown, parser_options()) {
        builder.event(event);
    }
    builder.finish()
}

struct PendingCode {
    info: String,
    text: String,
}

struct PendingImage {
    src: String,
    title: String,
    alt: String,
}

/// Heading ids, page title and table of contents.
#[derive(Default)]
struct Headings {
    id_counts: HashMap<String, usize>,
    used: HashSet<String>,
    title: Option<String>,
    toc: Vec<TocEntry>,
}

impl Headings {
    /// Record a finished heading and return its unique id.
    fn complete(&mut self, level: u8, text: &str) -> String {
        let text = text.trim();
        let id = self.unique_id(text);
        if level == 1 && self.title.is_none() {
            self.title = Some(text.to_owned());
        } else if (2..=3).contains(&level) {
            self.toc.push(TocEntry {
                level,
                title: text.to_owned(),
                id: id.clone(),
            });
        }
        id
    }

    fn unique_id(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = "section".to_owned();
        }
        let count = self.id_counts.entry(base.clone()).or_default();
        let mut id = match *count {
            0 => base.clone(),
            n => format!("{base}-{n}"),
        };
        while self.used.contains(&id) {
            *count += 1;
            id = format!("{base}-{count}");
        }
        *count += 1;
        self.used.insert(id.clone());
        id
    }
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    /// Open elements, innermost last.
    stack: Vec<Element>,
    code: Option<PendingCode>,
    image: Option<PendingImage>,
    metadata: Option<String>,
    front_matter: Option<String>,
    alignments: Vec<Alignment>,
    in_table_head: bool,
    cell_index: usize,
    headings: Headings,
}

impl TreeBuilder {
    fn finish(mut self) -> Tree {
        while !self.stack.is_empty() {
            self.close();
        }
        Tree {
            nodes: self.root,
            title: self.headings.title,
            toc: self.headings.toc,
            front_matter: self.front_matter,
        }
    }

    fn append(&mut self, node: Node) {
        let children = match self.stack.last_mut() {
            Some(top) => &mut top.children,
            None => &mut self.root,
        };
        // Adjacent raw HTML lines of one block are kept together.
        if let (Node::Raw(html), Some(Node::Raw(prev))) = (&node, children.last_mut()) {
            prev.push_str(html);
            return;
        }
        children.push(node);
    }

    fn open(&mut self, element: Element) {
        self.stack.push(element);
    }

    /// Close the innermost element and attach it to its parent.
    fn close(&mut self) {
        if let Some(element) = self.stack.pop() {
            self.append(Node::Element(element));
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(image) = &mut self.image {
                    image.alt.push_str(&code);
                } else {
                    self.append(Element::new("code").with_child(Node::text(code.as_ref())).into());
                }
            }
            Event::Html(html) => self.block_html(&html),
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::SoftBreak => self.text("\n"),
            Event::HardBreak => self.append(Element::new("br").into()),
            Event::Rule => self.append(Element::new("hr").into()),
            Event::TaskListMarker(checked) => {
                let mut input = Element::new("input")
                    .with_attr("type", "checkbox")
                    .with_attr("disabled", "");
                if checked {
                    input.set_attr("checked", "");
                }
                self.append(input.into());
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        if self.image.is_some() {
            return;
        }
        match tag {
            Tag::Paragraph => self.open(Element::new("p")),
            Tag::Heading { level, .. } => self.open(Element::new(format!("h{}", heading_level(level)))),
            Tag::BlockQuote(kind) => {
                let mut quote = Element::new("blockquote");
                if let Some(kind) = kind {
                    quote.set_attr("class", format!("alert alert-{}", alert_name(kind)));
                }
                self.open(quote);
            }
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some(PendingCode {
                    info,
                    text: String::new(),
                });
            }
            Tag::List(Some(start)) => {
                let mut list = Element::new("ol");
                if start != 1 {
                    list.set_attr("start", start.to_string());
                }
                self.open(list);
            }
            Tag::List(None) => self.open(Element::new("ul")),
            Tag::Item => self.open(Element::new("li")),
            Tag::Table(alignments) => {
                self.alignments = alignments;
                self.open(Element::new("table"));
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell_index = 0;
                self.open(Element::new("thead"));
                self.open(Element::new("tr"));
            }
            Tag::TableRow => {
                self.cell_index = 0;
                self.open(Element::new("tr"));
            }
            Tag::TableCell => {
                let mut cell = Element::new(if self.in_table_head { "th" } else { "td" });
                if let Some(align) = alignment_css(self.alignments.get(self.cell_index)) {
                    cell.style.set("text-align", align);
                }
                self.open(cell);
            }
            Tag::Emphasis => self.open(Element::new("em")),
            Tag::Strong => self.open(Element::new("strong")),
            Tag::Strikethrough => self.open(Element::new("s")),
            Tag::Superscript => self.open(Element::new("sup")),
            Tag::Subscript => self.open(Element::new("sub")),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut link = Element::new("a").with_attr("href", dest_url.as_ref());
                if !title.is_empty() {
                    link.set_attr("title", title.as_ref());
                }
                self.open(link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = Some(PendingImage {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                });
            }
            Tag::DefinitionList => self.open(Element::new("dl")),
            Tag::DefinitionListTitle => self.open(Element::new("dt")),
            Tag::DefinitionListDefinition => self.open(Element::new("dd")),
            Tag::MetadataBlock(_) => self.metadata = Some(String::new()),
            Tag::HtmlBlock | Tag::FootnoteDefinition(_) => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        if self.image.is_some() && !matches!(tag, TagEnd::Image) {
            return;
        }
        match tag {
            TagEnd::Heading(level) => self.end_heading(heading_level(level)),
            TagEnd::CodeBlock => {
                if let Some(code) = self.code.take() {
                    let block = code_block_element(&code.info, code.text);
                    self.append(block.into());
                }
            }
            TagEnd::Image => {
                if let Some(image) = self.image.take() {
                    let mut img = Element::new("img")
                        .with_attr("src", image.src)
                        .with_attr("alt", image.alt);
                    if !image.title.is_empty() {
                        img.set_attr("title", image.title);
                    }
                    self.append(img.into());
                }
            }
            TagEnd::TableHead => {
                self.close();
                self.close();
                self.in_table_head = false;
                self.open(Element::new("tbody"));
            }
            TagEnd::TableCell => {
                self.close();
                self.cell_index += 1;
            }
            TagEnd::Table => {
                if self.stack.last().is_some_and(|el| el.is("tbody")) {
                    self.close();
                }
                self.close();
                self.alignments.clear();
            }
            TagEnd::MetadataBlock(_) => self.front_matter = self.metadata.take(),
            TagEnd::HtmlBlock | TagEnd::FootnoteDefinition => {}
            TagEnd::Paragraph
            | TagEnd::BlockQuote(_)
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::TableRow
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Superscript
            | TagEnd::Subscript
            | TagEnd::Link
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {
                self.close();
            }
        }
    }

    fn end_heading(&mut self, level: u8) {
        let Some(mut heading) = self.stack.pop() else {
            return;
        };
        let text: String = heading.children.iter().map(Node::text_content).collect();
        let id = self.headings.complete(level, &text);
        heading.set_attr("id", id);
        self.append(heading.into());
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = &mut self.code {
            code.text.push_str(text);
        } else if let Some(image) = &mut self.image {
            image.alt.push_str(text);
        } else if let Some(metadata) = &mut self.metadata {
            metadata.push_str(text);
        } else {
            self.append(Node::text(text));
        }
    }

    /// Block HTML arrives line by line; marker lines become elements.
    fn block_html(&mut self, html: &str) {
        for line in html.split_inclusive('\n') {
            match markers::parse(line) {
                Some(marker) => self.marker(marker),
                None => self.append(Node::raw(line)),
            }
        }
    }

    /// Only self-closing markers are recognized inline.
    fn inline_html(&mut self, html: &str) {
        match markers::parse(html) {
            Some(marker) if marker.kind == MarkerKind::SelfClosing => self.marker(marker),
            _ => self.append(Node::raw(html)),
        }
    }

    fn marker(&mut self, marker: Marker) {
        let mut element = Element::new(marker.tag);
        for (name, value) in marker.attrs {
            element.set_attr(name, value);
        }
        match marker.kind {
            MarkerKind::Open => self.open(element),
            MarkerKind::SelfClosing => self.append(element.into()),
            MarkerKind::Close => {
                let Some(depth) = self.stack.iter().rposition(|el| el.is(marker.tag)) else {
                    return;
                };
                while self.stack.len() > depth {
                    self.close();
                }
            }
        }
    }
}

/// Build a `code-block` element from a fence info string.
///
/// The first token is the language; the rest are `key=value` attributes,
/// optionally wrapped in braces. Attributes are sorted by name.
fn code_block_element(info: &str, code: String) -> Element {
    let info = info.trim();
    let (language, rest) = info.split_once(char::is_whitespace).unwrap_or((info, ""));
    let rest = rest.trim();
    let rest = rest
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .unwrap_or(rest);

    let mut block = Element::new(CODE_BLOCK_TAG);
    if !language.is_empty() {
        block.set_attr("language", language);
    }
    for (name, value) in DirectiveArgs::parse("", rest).sorted_attrs() {
        if name != "language" {
            block.set_attr(name, value);
        }
    }
    block.with_child(Node::text(code))
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alert_name(kind: BlockQuoteKind) -> &'static str {
    match kind {
        BlockQuoteKind::Note => "note",
        BlockQuoteKind::Tip => "tip",
        BlockQuoteKind::Important => "important",
        BlockQuoteKind::Warning => "warning",
        BlockQuoteKind::Caution => "caution",
    }
}

fn alignment_css(alignment: Option<&Alignment>) -> Option<&'static str> {
    match alignment? {
        Alignment::Left => Some("left"),
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
        Alignment::None => None,
    }
}

/// Convert heading text to a URL-safe slug.
///
/// Lowercases ASCII alphanumerics, collapses whitespace, dashes and
/// underscores into single dashes, and drops everything else.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::render_nodes;
    use pretty_assertions::assert_eq;

    fn html(markdown: &str) -> String {
        render_nodes(&build_tree(markdown).nodes)
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Gas Management"), "gas-management");
        assert_eq!(slugify("What's new in v10?"), "whats-new-in-v10");
        assert_eq!(slugify("  snake_case  "), "snake-case");
        assert_eq!(slugify("…"), "");
    }

    #[test]
    fn test_paragraph_and_inline_formatting() {
        assert_eq!(
            html("Some *em*, **strong**, ~~old~~ and `code`."),
            "<p>Some <em>em</em>, <strong>strong</strong>, <s>old</s> and <code>code</code>.</p>"
        );
    }

    #[test]
    fn test_headings_ids_title_and_toc() {
        let tree = build_tree("# Callbacks\n\n## Gas\n\n### Limits\n\n## Gas\n\n#### Deep");
        assert_eq!(tree.title.as_deref(), Some("Callbacks"));
        assert_eq!(
            tree.toc,
            vec![
                TocEntry { level: 2, title: "Gas".to_owned(), id: "gas".to_owned() },
                TocEntry { level: 3, title: "Limits".to_owned(), id: "limits".to_owned() },
                TocEntry { level: 2, title: "Gas".to_owned(), id: "gas-1".to_owned() },
            ]
        );
        let out = render_nodes(&tree.nodes);
        assert!(out.starts_with(r#"<h1 id="callbacks">Callbacks</h1><h2 id="gas">Gas</h2>"#));
        assert!(out.contains(r#"<h4 id="deep">Deep</h4>"#));
    }

    #[test]
    fn test_suffixed_ids_skip_existing_slugs() {
        let tree = build_tree("## Gas\n\n## Gas 1\n\n## Gas");
        let ids: Vec<&str> = tree.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["gas", "gas-1", "gas-2"]);
        assert!(render_nodes(&tree.nodes).ends_with(r#"<h2 id="gas-2">Gas</h2>"#));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let tree = build_tree("## The `OnRecvPacket` hook");
        assert_eq!(tree.toc[0].id, "the-onrecvpacket-hook");
        assert_eq!(tree.toc[0].title, "The OnRecvPacket hook");
    }

    #[test]
    fn test_links_and_images() {
        assert_eq!(
            html(r#"[IBC](https://ibc.cosmos.network "IBC site") ![diagram *flow*](/img/flow.svg)"#),
            concat!(
                r#"<p><a href="https://ibc.cosmos.network" title="IBC site">IBC</a> "#,
                r#"<img src="/img/flow.svg" alt="diagram flow"></p>"#
            )
        );
    }

    #[test]
    fn test_ordered_list_start() {
        assert_eq!(
            html("3. three\n4. four"),
            r#"<ol start="3"><li>three</li><li>four</li></ol>"#
        );
        assert_eq!(html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_task_list_markers() {
        let out = html("- [x] done\n- [ ] todo");
        assert!(out.contains(r#"<input type="checkbox" disabled="" checked="">"#));
        assert!(out.contains(r#"<li><input type="checkbox" disabled="">"#));
    }

    #[test]
    fn test_table_with_alignment() {
        assert_eq!(
            html("| Key | Color |\n|:----|------:|\n| info | #336667 |"),
            concat!(
                r#"<table><thead><tr><th style="text-align:left">Key</th>"#,
                r#"<th style="text-align:right">Color</th></tr></thead>"#,
                r#"<tbody><tr><td style="text-align:left">info</td>"#,
                r#"<td style="text-align:right">#336667</td></tr></tbody></table>"#
            )
        );
    }

    #[test]
    fn test_fenced_code_becomes_code_block_element() {
        let tree = build_tree(
            "```go title=\"keeper.go\" source=\"https://github.com/cosmos/ibc-go\"\nfunc f() {}\n```",
        );
        let block = tree.nodes[0].as_element().unwrap();
        assert_eq!(block.tag, "code-block");
        assert_eq!(
            block.attrs().collect::<Vec<_>>(),
            vec![
                ("language", "go"),
                ("source", "https://github.com/cosmos/ibc-go"),
                ("title", "keeper.go"),
            ]
        );
        assert_eq!(tree.nodes[0].text_content(), "func f() {}\n");
    }

    #[test]
    fn test_fence_attrs_in_braces() {
        let block = code_block_element("rust {source=https://x.test}", String::new());
        assert_eq!(block.attr("language"), Some("rust"));
        assert_eq!(block.attr("source"), Some("https://x.test"));
    }

    #[test]
    fn test_indented_code_has_no_language() {
        let tree = build_tree("    let x = 1;\n");
        let block = tree.nodes[0].as_element().unwrap();
        assert_eq!(block.tag, "code-block");
        assert_eq!(block.attr("language"), None);
    }

    #[test]
    fn test_box_markers_become_elements() {
        let md = "\n<ibc-highlight-box title=\"Heads up\" type=\"warning\">\n\nBody with [link](/x)\n\n</ibc-highlight-box>\n";
        let tree = build_tree(md);
        assert_eq!(tree.nodes.len(), 1);
        let el = tree.nodes[0].as_element().unwrap();
        assert_eq!(el.tag, "highlight-box");
        assert_eq!(el.attr("title"), Some("Heads up"));
        assert_eq!(el.attr("type"), Some("warning"));
        assert_eq!(
            render_nodes(&el.children),
            r#"<p>Body with <a href="/x">link</a></p>"#
        );
    }

    #[test]
    fn test_nested_box_markers() {
        let md = concat!(
            "\n<ibc-highlight-box type=\"tip\">\n\n",
            "\n<ibc-highlight-box type=\"note\">\n\ninner\n\n</ibc-highlight-box>\n\n",
            "outer\n\n</ibc-highlight-box>\n"
        );
        let tree = build_tree(md);
        assert_eq!(tree.nodes.len(), 1);
        let outer = tree.nodes[0].as_element().unwrap();
        assert_eq!(outer.attr("type"), Some("tip"));
        let inner = outer.children[0].as_element().unwrap();
        assert_eq!(inner.attr("type"), Some("note"));
        assert!(outer.children[1].is_element("p"));
    }

    #[test]
    fn test_inline_tag_marker() {
        let tree = build_tree(r#"Since <ibc-highlight-tag type="ibc-go" version="v8"/> only."#);
        let p = tree.nodes[0].as_element().unwrap();
        let tag = p.children[1].as_element().unwrap();
        assert_eq!(tag.tag, "highlight-tag");
        assert_eq!(tag.attr("version"), Some("v8"));
    }

    #[test]
    fn test_other_raw_html_kept() {
        assert_eq!(
            html("<div class=\"x\">\nraw\n</div>\n\ntext <kbd>K</kbd>"),
            "<div class=\"x\">\nraw\n</div>\n<p>text <kbd>K</kbd></p>"
        );
    }

    #[test]
    fn test_front_matter_captured() {
        let tree = build_tree("---\ntitle: Callbacks\n---\n\n# Heading\n");
        assert_eq!(tree.front_matter.as_deref().map(str::trim), Some("title: Callbacks"));
        assert_eq!(render_nodes(&tree.nodes), r#"<h1 id="heading">Heading</h1>"#);
    }

    #[test]
    fn test_gfm_alert() {
        let out = html("> [!WARNING]\n> Check gas limits.");
        assert!(out.starts_with(r#"<blockquote class="alert alert-warning">"#));
    }
}
