//! ibcdocs CLI - IBC documentation renderer.
//!
//! Provides commands for:
//! - `render`: Render one Markdown file to HTML
//! - `build`: Render a documentation tree to a static HTML site
//! - `categories`: List highlight box and tag categories

mod commands;
mod error;
mod output;
mod site;
mod template;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CategoriesArgs, RenderArgs};
use output::Output;

/// ibcdocs - IBC documentation renderer.
#[derive(Parser)]
#[command(name = "ibcdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single Markdown file.
    Render(RenderArgs),
    /// Render every Markdown file under the source directory.
    Build(BuildArgs),
    /// List highlight box and tag categories.
    Categories(CategoriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Build(args) => args.verbose,
        Commands::Categories(_) => false,
    };

    // --verbose enables INFO, otherwise RUST_LOG applies
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Build(args) => args.execute(),
        Commands::Categories(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
