//! Documentation components and Markdown pipeline for IBC docs.
//!
//! The crate has two layers:
//!
//! - **Components**: [`HighlightBox`], [`HighlightTag`] and [`CodeBlock`]
//!   render elements of a [`Node`] tree using the category tables in
//!   [`styles`] and a [`Theme`]. A [`Components`] map selects the component
//!   for each tag and supports per-site overrides.
//! - **Pipeline**: [`PageRenderer`] turns Markdown into HTML. Directives
//!   (see [`directive`]) are rewritten first, pulldown-cmark events are
//!   collected into a node tree, and the tree is expanded with the
//!   component map.
//!
//! # Example
//!
//! ```
//! use ibcdocs_renderer::PageRenderer;
//!
//! let markdown = ":::highlight-box[Note]{type=\"note\"}\nRelayers are permissionless.\n:::\n";
//! let result = PageRenderer::default().render(markdown, None);
//!
//! assert!(result.html.contains("highlight-box-note"));
//! assert!(result.warnings.is_empty());
//! ```

mod components;
pub mod directive;
mod fence;
mod front_matter;
mod markers;
mod node;
mod page;
pub mod styles;
mod theme;
mod tree;

pub use components::{
    CODE_BLOCK_TAG, CodeBlock, Component, Components, HIGHLIGHT_BOX_TAG, HIGHLIGHT_TAG_TAG,
    HighlightBox, HighlightTag, RenderContext,
};
pub use front_matter::{FrontMatter, PageTag};
pub use node::{Element, Node, Style, escape_html, render_nodes, unescape_html};
pub use page::{PageRenderResult, PageRenderer};
pub use theme::{DARK_TEXT, LIGHT_TEXT, Theme};
pub use tree::{TocEntry, slugify};
