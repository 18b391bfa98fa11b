//! Static site building: every Markdown file under a source directory is
//! rendered to an HTML file at the same relative path.

use std::fs;
use std::path::{Path, PathBuf};

use ibcdocs_renderer::PageRenderer;
use rayon::prelude::*;

use crate::template::render_page;

/// Error returned by [`SiteBuilder::build`].
#[derive(Debug, thiserror::Error)]
pub(crate) enum BuildError {
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One rendered page.
#[derive(Debug)]
pub(crate) struct BuiltPage {
    /// Source path relative to the source directory.
    pub source: PathBuf,
    pub output: PathBuf,
    pub warnings: Vec<String>,
}

/// Result of a build.
#[derive(Debug, Default)]
pub(crate) struct BuildReport {
    /// Pages in source path order.
    pub pages: Vec<BuiltPage>,
}

impl BuildReport {
    pub(crate) fn warning_count(&self) -> usize {
        self.pages.iter().map(|p| p.warnings.len()).sum()
    }
}

/// Renders a directory of Markdown pages in parallel.
pub(crate) struct SiteBuilder {
    renderer: PageRenderer,
    full_page: bool,
}

impl SiteBuilder {
    pub(crate) fn new(renderer: PageRenderer) -> Self {
        Self {
            renderer,
            full_page: true,
        }
    }

    /// Write bare fragments instead of full HTML documents.
    #[cfg(test)]
    pub(crate) fn fragments(mut self) -> Self {
        self.full_page = false;
        self
    }

    /// Render every `.md` file under `source_dir` into `output_dir`.
    pub(crate) fn build(
        &self,
        source_dir: &Path,
        output_dir: &Path,
    ) -> Result<BuildReport, BuildError> {
        if !source_dir.is_dir() {
            return Err(BuildError::SourceNotFound(source_dir.to_path_buf()));
        }

        let sources = collect_sources(source_dir)?;
        tracing::info!(
            pages = sources.len(),
            source = %source_dir.display(),
            "Building site"
        );

        let pages = sources
            .par_iter()
            .map(|rel| self.build_page(source_dir, output_dir, rel))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BuildReport { pages })
    }

    fn build_page(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        rel: &Path,
    ) -> Result<BuiltPage, BuildError> {
        let source_path = source_dir.join(rel);
        let markdown = fs::read_to_string(&source_path).map_err(BuildError::io(&source_path))?;

        let result = self.renderer.render(&markdown, Some(rel));
        let html = if self.full_page {
            let stem = rel
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            render_page(&result, &stem)
        } else {
            result.html
        };

        let output = output_dir.join(rel).with_extension("html");
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
        }
        fs::write(&output, html).map_err(BuildError::io(&output))?;
        tracing::debug!(page = %rel.display(), output = %output.display(), "Wrote page");

        Ok(BuiltPage {
            source: rel.to_path_buf(),
            output,
            warnings: result.warnings,
        })
    }
}

/// Markdown files under `root` as relative paths, sorted. Hidden files and
/// directories are skipped.
fn collect_sources(root: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut sources = Vec::new();
    walk(root, root, &mut sources)?;
    sources.sort();
    Ok(sources)
}

fn walk(root: &Path, dir: &Path, sources: &mut Vec<PathBuf>) -> Result<(), BuildError> {
    for entry in fs::read_dir(dir).map_err(BuildError::io(dir))? {
        let entry = entry.map_err(BuildError::io(dir))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type().map_err(BuildError::io(&path))?;
        if file_type.is_dir() {
            walk(root, &path, sources)?;
        } else if path.extension().is_some_and(|ext| ext == "md")
            && let Ok(rel) = path.strip_prefix(root)
        {
            sources.push(rel.to_path_buf());
        }
    }
    Ok(())
}
