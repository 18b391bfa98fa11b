//! Directive preprocessing of Markdown source.

use std::path::PathBuf;

use crate::fence::FenceTracker;

use super::parser::{ParsedDirective, parse_container_line, parse_line};
use super::{
    ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective,
    LeafDirective,
};

/// An open container and the handler that accepted it, if any.
struct OpenContainer {
    name: String,
    handler: Option<usize>,
}

/// Rewrites directive syntax into HTML before Markdown parsing.
///
/// Lines inside fenced code blocks and text inside code spans are left
/// untouched. Directives without a registered handler pass through
/// unchanged.
///
/// ```
/// use ibcdocs_renderer::directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, DirectiveProcessor, InlineDirective,
/// };
///
/// struct Kbd;
///
/// impl InlineDirective for Kbd {
///     fn name(&self) -> &str { "kbd" }
///     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
///     }
/// }
///
/// let mut processor = DirectiveProcessor::new().with_inline(Kbd);
/// assert_eq!(processor.process("Press :kbd[Ctrl+C]."), "Press <kbd>Ctrl+C</kbd>.");
/// ```
#[derive(Default)]
pub struct DirectiveProcessor {
    source_path: Option<PathBuf>,
    inline_handlers: Vec<Box<dyn InlineDirective>>,
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    container_handlers: Vec<Box<dyn ContainerDirective>>,
    fence: FenceTracker,
    open_containers: Vec<OpenContainer>,
    warnings: Vec<String>,
}

impl DirectiveProcessor {
    /// Create a processor with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name used in warnings.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Register an inline directive handler.
    #[must_use]
    pub fn with_inline<D: InlineDirective + 'static>(mut self, handler: D) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    /// Register a leaf directive handler.
    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self
    }

    /// Register a container directive handler.
    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.container_handlers.push(Box::new(handler));
        self
    }

    /// Rewrite directives in `input`.
    ///
    /// Line endings are preserved. Containers still open at the end of the
    /// input are reported as warnings.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());

        for (idx, line) in input.lines().enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            let processed = self.process_line(line, idx + 1);
            output.push_str(&processed);
        }
        if input.ends_with('\n') {
            output.push('\n');
        }

        self.finalize();
        output
    }

    fn context(&self, line: usize) -> DirectiveContext<'_> {
        DirectiveContext {
            source_path: self.source_path.as_deref(),
            line,
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> String {
        self.fence.update(line);
        if self.fence.in_fence() {
            return line.to_owned();
        }

        match parse_container_line(line) {
            Some(ParsedDirective::ContainerStart { name, args }) => {
                self.open_container(line, name, args, line_num)
            }
            Some(ParsedDirective::ContainerEnd) => self.close_container(line, line_num),
            _ => self.process_inline_directives(line, line_num),
        }
    }

    fn open_container(
        &mut self,
        line: &str,
        name: String,
        args: DirectiveArgs,
        line_num: usize,
    ) -> String {
        let handler = self
            .container_handlers
            .iter()
            .position(|h| h.name() == name);

        let output = match handler {
            Some(idx) => {
                let ctx = DirectiveContext {
                    source_path: self.source_path.as_deref(),
                    line: line_num,
                };
                self.container_handlers[idx].start(args, &ctx)
            }
            None => DirectiveOutput::Skip,
        };

        match output {
            DirectiveOutput::Html(html) => {
                self.open_containers.push(OpenContainer {
                    name,
                    handler,
                });
                format!("{}{}", leading_whitespace(line), indent_lines(&html, line))
            }
            DirectiveOutput::Skip => {
                self.open_containers.push(OpenContainer {
                    name,
                    handler: None,
                });
                line.to_owned()
            }
        }
    }

    fn close_container(&mut self, line: &str, line_num: usize) -> String {
        let Some(open) = self.open_containers.pop() else {
            let location = self.context(line_num).location();
            self.warnings
                .push(format!("{location}: stray ::: with no opening directive"));
            return line.to_owned();
        };

        match open.handler {
            Some(idx) => {
                let ctx = DirectiveContext {
                    source_path: self.source_path.as_deref(),
                    line: line_num,
                };
                self.container_handlers[idx]
                    .end(&ctx)
                    .map(|html| format!("{}{}", leading_whitespace(line), indent_lines(&html, line)))
                    .unwrap_or_default()
            }
            None => line.to_owned(),
        }
    }

    fn process_inline_directives(&mut self, line: &str, line_num: usize) -> String {
        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some((directive, start, end)) = parse_line(remaining) {
            result.push_str(&remaining[..start]);
            match self.dispatch(directive, line_num) {
                DirectiveOutput::Html(html) => result.push_str(&indent_lines(&html, line)),
                DirectiveOutput::Skip => result.push_str(&remaining[start..end]),
            }
            remaining = &remaining[end..];
        }
        result.push_str(remaining);

        result
    }

    fn dispatch(&mut self, directive: ParsedDirective, line_num: usize) -> DirectiveOutput {
        let ctx = DirectiveContext {
            source_path: self.source_path.as_deref(),
            line: line_num,
        };
        match directive {
            ParsedDirective::Inline { name, args } => self
                .inline_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map_or(DirectiveOutput::Skip, |h| h.process(args, &ctx)),
            ParsedDirective::Leaf { name, args } => self
                .leaf_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map_or(DirectiveOutput::Skip, |h| h.process(args, &ctx)),
            ParsedDirective::ContainerStart { .. } | ParsedDirective::ContainerEnd => {
                DirectiveOutput::Skip
            }
        }
    }

    fn finalize(&mut self) {
        for open in self.open_containers.drain(..) {
            self.warnings.push(format!(
                "unclosed container directive :::{} (missing closing :::)",
                open.name
            ));
        }
    }

    /// Warnings from the processor and all handlers.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut all = self.warnings.clone();
        all.extend(self.inline_handlers.iter().flat_map(|h| h.warnings().iter().cloned()));
        all.extend(self.leaf_handlers.iter().flat_map(|h| h.warnings().iter().cloned()));
        all.extend(
            self.container_handlers
                .iter()
                .flat_map(|h| h.warnings().iter().cloned()),
        );
        all
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Prefix every non-empty line after the first with the indentation of
/// `line`.
fn indent_lines(html: &str, line: &str) -> String {
    let indent = leading_whitespace(line);
    if indent.is_empty() || !html.contains('\n') {
        return html.to_owned();
    }
    let mut out = String::with_capacity(html.len());
    for (idx, part) in html.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
            if !part.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(part);
    }
    out
}
