//! CLI command implementations.

mod build;
mod categories;
mod render;

pub(crate) use build::BuildArgs;
pub(crate) use categories::CategoriesArgs;
pub(crate) use render::RenderArgs;

use ibcdocs_config::{Config, ThemeConfig};
use ibcdocs_renderer::{Components, PageRenderer, Theme};

fn theme_from_config(theme: &ThemeConfig) -> Theme {
    Theme {
        link_color: theme.link_color.clone(),
        code_highlight_var: theme.code_highlight_var.clone(),
        gradient_angle: theme.gradient_angle.clone(),
    }
}

/// Page renderer with the built-in components and the configured theme.
fn page_renderer(config: &Config) -> PageRenderer {
    PageRenderer::new(Components::defaults(), theme_from_config(&config.theme))
}
