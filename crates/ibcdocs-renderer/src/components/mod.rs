//! Component registry and tree expansion.
//!
//! A [`Component`] turns one element of the document tree (its attributes
//! are the props, its children the nested content) into a rendered node.
//! [`Components`] maps tag names to components. Page renderers receive it
//! explicitly; overrides are merged over a parent set with
//! [`Components::merge`].
//!
//! # Example
//!
//! ```
//! use ibcdocs_renderer::{Components, Element, Node, RenderContext, Theme};
//!
//! let overrides = Components::empty().with("h1", |el: Element, _cx: &mut RenderContext<'_>| {
//!     Node::from(Element::new("h1").with_attr("class", "page-title").with_children(el.children))
//! });
//! let components = Components::merge(&Components::defaults(), overrides, false);
//!
//! let theme = Theme::default();
//! let mut cx = RenderContext::new(&theme);
//! let tree = vec![Node::from(Element::new("h1").with_child(Node::text("Callbacks")))];
//! let out = components.expand_all(tree, &mut cx);
//!
//! assert_eq!(
//!     ibcdocs_renderer::render_nodes(&out),
//!     r#"<h1 class="page-title">Callbacks</h1>"#
//! );
//! ```

mod code_block;
mod highlight_box;
mod highlight_tag;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::node::{Element, Node};
use crate::theme::Theme;

pub use code_block::{CODE_BLOCK_TAG, CodeBlock};
pub use highlight_box::{HIGHLIGHT_BOX_TAG, HighlightBox};
pub use highlight_tag::{HIGHLIGHT_TAG_TAG, HighlightTag};

/// Renders one element into a node.
///
/// Implemented for closures `Fn(Element, &mut RenderContext) -> Node`.
pub trait Component: Send + Sync {
    /// Render `element`. Its children are not yet expanded.
    fn render(&self, element: Element, cx: &mut RenderContext<'_>) -> Node;
}

impl<F> Component for F
where
    F: Fn(Element, &mut RenderContext<'_>) -> Node + Send + Sync,
{
    fn render(&self, element: Element, cx: &mut RenderContext<'_>) -> Node {
        self(element, cx)
    }
}

/// Per-render state handed to components.
pub struct RenderContext<'a> {
    /// Active theme.
    pub theme: &'a Theme,
    warnings: Vec<String>,
}

impl<'a> RenderContext<'a> {
    /// Create a context for one render pass.
    #[must_use]
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            warnings: Vec::new(),
        }
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the context and return its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

/// Mapping from tag name to component.
#[derive(Clone, Default)]
pub struct Components {
    map: HashMap<String, Arc<dyn Component>>,
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Components")
            .field("tags", &self.tags())
            .finish()
    }
}

impl Components {
    /// An empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in components: highlight box, highlight tag and code block.
    #[must_use]
    pub fn defaults() -> Self {
        Self::empty()
            .with(HIGHLIGHT_BOX_TAG, HighlightBox)
            .with(HIGHLIGHT_TAG_TAG, HighlightTag)
            .with(CODE_BLOCK_TAG, CodeBlock)
    }

    /// Register a component for `tag`, replacing any existing one.
    #[must_use]
    pub fn with<C: Component + 'static>(mut self, tag: impl Into<String>, component: C) -> Self {
        self.map.insert(tag.into(), Arc::new(component));
        self
    }

    /// Merge `overrides` over `parent`.
    ///
    /// Each override replaces the parent entry for the same tag. With
    /// `disable_parent_inheritance`, the result is `overrides` alone.
    #[must_use]
    pub fn merge(parent: &Components, overrides: Components, disable_parent_inheritance: bool) -> Self {
        if disable_parent_inheritance {
            return overrides;
        }
        let mut map = parent.map.clone();
        map.extend(overrides.map);
        Self { map }
    }

    /// Component registered for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Component>> {
        self.map.get(tag)
    }

    /// Whether a component is registered for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.map.contains_key(tag)
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.map.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Expand every node of a sequence.
    #[must_use]
    pub fn expand_all(&self, nodes: Vec<Node>, cx: &mut RenderContext<'_>) -> Vec<Node> {
        nodes.into_iter().map(|node| self.expand(node, cx)).collect()
    }

    /// Expand one node.
    ///
    /// The component for an element's tag receives the element with its
    /// children unexpanded; the children of whatever it returns are then
    /// expanded. The returned node itself is not expanded again, so a
    /// component may return an element with its own tag.
    #[must_use]
    pub fn expand(&self, node: Node, cx: &mut RenderContext<'_>) -> Node {
        let Node::Element(element) = node else {
            return node;
        };

        let rendered = match self.map.get(&element.tag) {
            Some(component) => component.render(element, cx),
            None => Node::Element(element),
        };

        match rendered {
            Node::Element(mut el) => {
                let children = std::mem::take(&mut el.children);
                el.children = self.expand_all(children, cx);
                Node::Element(el)
            }
            other => other,
        }
    }
}
