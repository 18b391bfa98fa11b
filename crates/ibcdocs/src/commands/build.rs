//! `ibcdocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use ibcdocs_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::site::{BuildReport, SiteBuilder};

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover ibcdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Fail when any page has warnings (overrides config).
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            strict: self.strict.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let docs = &config.docs_resolved;

        output.info(&format!("Source: {}", docs.source_dir.display()));
        output.info(&format!("Output: {}", docs.output_dir.display()));

        let report =
            SiteBuilder::new(super::page_renderer(&config)).build(&docs.source_dir, &docs.output_dir)?;

        report_pages(&output, &report);
        check_strict(&report, config.render.strict)?;

        output.success(&format!(
            "Built {} page(s) to {}",
            report.pages.len(),
            docs.output_dir.display()
        ));
        Ok(())
    }
}

fn report_pages(output: &Output, report: &BuildReport) {
    for page in &report.pages {
        tracing::info!(
            page = %page.source.display(),
            output = %page.output.display(),
            warnings = page.warnings.len(),
            "Built page"
        );
        for warning in &page.warnings {
            tracing::debug!(page = %page.source.display(), "{warning}");
            output.warning(warning);
        }
    }
}

fn check_strict(report: &BuildReport, strict: bool) -> Result<(), CliError> {
    let warnings = report.warning_count();
    if strict && warnings > 0 {
        return Err(CliError::Strict { warnings });
    }
    Ok(())
}
