//! Directive handler output.

/// What a directive handler produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// HTML written in place of the directive. It passes through
    /// pulldown-cmark as raw HTML.
    Html(String),
    /// Leave the directive text unchanged.
    Skip,
}

impl DirectiveOutput {
    /// Create an HTML output.
    ///
    /// ```
    /// use ibcdocs_renderer::directive::DirectiveOutput;
    ///
    /// let output = DirectiveOutput::html("<ibc-highlight-tag type=\"devops\"/>");
    /// assert!(matches!(output, DirectiveOutput::Html(_)));
    /// ```
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
