//! Inline directive trait.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for inline directives: `:name[content]{attrs}`.
///
/// Inline directives sit inside a line of text. Handlers are `Send` but
/// not `Sync`: each page gets its own processor.
///
/// ```
/// use ibcdocs_renderer::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective};
///
/// struct Kbd;
///
/// impl InlineDirective for Kbd {
///     fn name(&self) -> &str { "kbd" }
///
///     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
///     }
/// }
/// ```
pub trait InlineDirective: Send {
    /// Name matched against `:name`.
    fn name(&self) -> &str;

    /// Handle one occurrence.
    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Warnings collected so far.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
