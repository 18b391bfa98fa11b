//! Directive processing context.

use std::path::Path;

/// Source location handed to directive handlers.
#[derive(Clone, Copy, Debug)]
pub struct DirectiveContext<'a> {
    /// File being rendered, if known.
    pub source_path: Option<&'a Path>,
    /// Line of the directive (1-indexed).
    pub line: usize,
}

impl DirectiveContext<'_> {
    /// `path:line` (or `line N`) prefix for warning messages.
    ///
    /// ```
    /// use std::path::Path;
    /// use ibcdocs_renderer::directive::DirectiveContext;
    ///
    /// let ctx = DirectiveContext { source_path: Some(Path::new("docs/callbacks.md")), line: 7 };
    /// assert_eq!(ctx.location(), "docs/callbacks.md:7");
    ///
    /// let ctx = DirectiveContext { source_path: None, line: 7 };
    /// assert_eq!(ctx.location(), "line 7");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        match self.source_path {
            Some(path) => format!("{}:{}", path.display(), self.line),
            None => format!("line {}", self.line),
        }
    }
}
