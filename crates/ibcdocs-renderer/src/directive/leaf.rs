//! Leaf directive trait.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for leaf directives: `::name[content]{attrs}`.
///
/// A leaf directive stands on its own line and produces a block.
pub trait LeafDirective: Send {
    /// Name matched against `::name`.
    fn name(&self) -> &str;

    /// Handle one occurrence.
    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Warnings collected so far.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
