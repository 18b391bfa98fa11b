//! `ibcdocs render` command implementation.

use std::path::PathBuf;

use clap::Args;
use ibcdocs_config::Config;

use crate::error::CliError;
use crate::output::Output;
use crate::template::render_page;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover ibcdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML document.
    #[arg(long)]
    full_page: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let markdown = std::fs::read_to_string(&self.file)?;
        let result = super::page_renderer(&config).render(&markdown, Some(self.file.as_path()));

        for warning in &result.warnings {
            tracing::debug!(file = %self.file.display(), "{warning}");
            output.warning(warning);
        }

        let html = if self.full_page {
            let stem = self
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            render_page(&result, &stem)
        } else {
            let mut html = result.html;
            html.push('\n');
            html
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.content(&html)?,
        }
        Ok(())
    }
}
