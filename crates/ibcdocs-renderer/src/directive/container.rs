//! Container directive trait.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for container directives: `:::name[content]{attrs}` ... `:::`.
///
/// The processor keeps the stack of open containers and calls
/// [`end`](Self::end) only for a container whose [`start`](Self::start)
/// returned HTML. Handlers that need per-level state keep their own stack.
///
/// ```
/// use ibcdocs_renderer::directive::{
///     ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput,
/// };
///
/// struct Details;
///
/// impl ContainerDirective for Details {
///     fn name(&self) -> &str { "details" }
///
///     fn start(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html(format!("\n<details><summary>{}</summary>\n", args.content))
///     }
///
///     fn end(&mut self, _ctx: &DirectiveContext) -> Option<String> {
///         Some("\n</details>\n".to_owned())
///     }
/// }
/// ```
pub trait ContainerDirective: Send {
    /// Name matched against `:::name`.
    fn name(&self) -> &str;

    /// Handle the opening line. [`DirectiveOutput::Skip`] declines the
    /// container; its opening and closing lines then pass through.
    fn start(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Handle the closing `:::`. `None` emits nothing.
    fn end(&mut self, ctx: &DirectiveContext) -> Option<String>;

    /// Warnings collected so far.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
