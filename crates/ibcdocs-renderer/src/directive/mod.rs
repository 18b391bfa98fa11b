//! `CommonMark` directive syntax for Markdown sources.
//!
//! Three forms are recognized:
//!
//! - **Inline** ([`InlineDirective`]): `:name[content]{attrs}` inside text
//! - **Leaf** ([`LeafDirective`]): `::name[content]{attrs}` on its own line
//! - **Container** ([`ContainerDirective`]): `:::name[content]{attrs}` ... `:::`
//!
//! [`DirectiveProcessor`] runs before pulldown-cmark and replaces
//! directives with HTML. The built-in [`HighlightBoxDirective`] and
//! [`HighlightTagDirective`] emit `ibc-*` marker tags that the tree
//! builder turns into `highlight-box` and `highlight-tag` elements.
//!
//! ```
//! use ibcdocs_renderer::directive::{
//!     DirectiveProcessor, HighlightBoxDirective, HighlightTagDirective,
//! };
//!
//! let mut processor = DirectiveProcessor::new()
//!     .with_container(HighlightBoxDirective)
//!     .with_inline(HighlightTagDirective);
//!
//! let out = processor.process(":::highlight-box[Heads up]{type=\"warning\"}\nText\n:::");
//! assert!(out.contains(r#"<ibc-highlight-box title="Heads up" type="warning">"#));
//! assert!(processor.warnings().is_empty());
//! ```

mod args;
mod container;
mod context;
mod highlight;
mod inline;
mod leaf;
mod output;
mod parser;
mod processor;

pub use args::DirectiveArgs;
pub use container::ContainerDirective;
pub use context::DirectiveContext;
pub use highlight::{HighlightBoxDirective, HighlightTagDirective};
pub use inline::InlineDirective;
pub use leaf::LeafDirective;
pub use output::DirectiveOutput;
pub use processor::DirectiveProcessor;
