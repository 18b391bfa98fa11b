//! Colored terminal output.

use console::{Style, Term};

/// Status messages on stderr; rendered content on stdout.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a heading (cyan bold) to stdout.
    pub(crate) fn heading(&self, msg: &str) {
        let _ = self
            .stdout
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Write content to stdout.
    pub(crate) fn content(&self, text: &str) -> std::io::Result<()> {
        self.stdout.write_str(text)
    }

    /// Print a `key  detail` row to stdout with the key highlighted.
    pub(crate) fn row(&self, key: &str, detail: &str) {
        let key = format!("{key:<16}");
        let _ = self
            .stdout
            .write_line(&format!("  {}{detail}", self.cyan_bold.apply_to(key)));
    }
}
