//! `ibcdocs categories` command implementation.

use clap::Args;
use ibcdocs_renderer::styles::{BOX_STYLES, DEFAULT_BOX_KEY, DEFAULT_TAG_KEY, TAG_STYLES};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the categories command.
#[derive(Args)]
pub(crate) struct CategoriesArgs {
    /// Only list highlight box types.
    #[arg(long, conflicts_with = "tags")]
    boxes: bool,

    /// Only list highlight tag types.
    #[arg(long)]
    tags: bool,
}

impl CategoriesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let all = !self.boxes && !self.tags;

        if all || self.boxes {
            output.heading(&format!("highlight-box types (default: {DEFAULT_BOX_KEY})"));
            for (key, detail) in box_rows() {
                output.row(key, &detail);
            }
        }
        if all || self.tags {
            output.heading(&format!("highlight-tag types (default: {DEFAULT_TAG_KEY})"));
            for (key, detail) in tag_rows() {
                output.row(key, &detail);
            }
        }
        Ok(())
    }
}

fn box_rows() -> Vec<(&'static str, String)> {
    BOX_STYLES
        .iter()
        .map(|(key, style)| {
            let text = if style.dark_mode { "light" } else { "dark" };
            (
                *key,
                format!(
                    "{} -> {}  {text} text  {}",
                    style.color1, style.color2, style.icon
                ),
            )
        })
        .collect()
}

fn tag_rows() -> Vec<(&'static str, String)> {
    TAG_STYLES
        .iter()
        .map(|(key, style)| {
            let text = if style.bright { "dark" } else { "light" };
            (*key, format!("{}  {text} text  \"{}\"", style.color, style.label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_box_rows() {
        let rows = box_rows();
        assert_eq!(rows.len(), BOX_STYLES.len());
        let info = rows.iter().find(|(k, _)| *k == "info").unwrap();
        assert_eq!(
            info.1,
            "#336667 -> #00B067  light text  /img/icons/hi-info-icon.svg"
        );
    }

    #[test]
    fn test_tag_rows() {
        let rows = tag_rows();
        assert_eq!(rows[0].0, "devops");
        let concepts = rows.iter().find(|(k, _)| *k == "concepts").unwrap();
        assert_eq!(concepts.1, "#AABAFF  dark text  \"Concept\"");
    }
}
