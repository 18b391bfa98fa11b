//! Configuration for ibcdocs.
//!
//! Parses `ibcdocs.toml` with serde and discovers it in the current
//! directory or its parents. CLI settings are applied during load via
//! [`CliSettings`].
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//! output_dir = "build"
//!
//! [theme]
//! link_color = "#FFFFFF"
//! code_highlight_var = "--ifm-code-background"
//! gradient_angle = "90deg"
//!
//! [render]
//! strict = false
//! ```
//!
//! ## Environment Variable Expansion
//!
//! All string values support `${VAR}` (error if unset) and
//! `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "ibcdocs.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Only `Some(true)` from `--strict`; the flag cannot turn strict off.
    pub strict: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw `[docs]` section (paths relative to the config file).
    docs: DocsConfigRaw,
    pub theme: ThemeConfig,
    pub render: RenderConfig,

    /// Resolved docs paths (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file, if one was loaded.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved documentation directories.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocsConfig {
    /// Markdown sources.
    pub source_dir: PathBuf,
    /// Rendered HTML.
    pub output_dir: PathBuf,
}

/// `[theme]` section.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Link color inside highlight boxes; unset follows the box text color.
    pub link_color: Option<String>,
    pub code_highlight_var: String,
    pub gradient_angle: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            link_color: None,
            code_highlight_var: "--ifm-code-background".to_owned(),
            gradient_angle: "90deg".to_owned(),
        }
    }
}

/// `[render]` section.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Fail the build when any page has warnings.
    pub strict: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config key, e.g. `theme.link_color`.
        field: String,
        message: String,
    },
}

const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// An explicit `config_path` must exist. Otherwise `ibcdocs.toml` is
    /// searched for in the current directory and its parents; without one,
    /// defaults relative to the current directory are used. CLI settings
    /// take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns error if the explicit file is missing, or reading, parsing,
    /// expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            let cwd = std::env::current_dir().unwrap_or_default();
            Self::default_with_base(&cwd)
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        tracing::debug!(
            config = ?config.config_path,
            source = %config.docs_resolved.source_dir.display(),
            output = %config.docs_resolved.output_dir.display(),
            strict = config.render.strict,
            "Loaded configuration"
        );
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(strict) = settings.strict {
            self.render.strict = strict;
        }
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            theme: ThemeConfig::default(),
            render: RenderConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                output_dir: base.join("build"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        Ok(config)
    }

    /// Validate theme values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let theme = &self.theme;
        require_non_empty(&theme.code_highlight_var, "theme.code_highlight_var")?;
        if !theme.code_highlight_var.starts_with("--") {
            return Err(ConfigError::Validation(
                "theme.code_highlight_var must be a CSS custom property starting with --"
                    .to_owned(),
            ));
        }

        let angle = theme.gradient_angle.trim();
        let valid_angle = ANGLE_UNITS.iter().any(|unit| {
            angle
                .strip_suffix(unit)
                .is_some_and(|n| !n.is_empty() && n.parse::<f64>().is_ok())
        });
        if !valid_angle {
            return Err(ConfigError::Validation(format!(
                "theme.gradient_angle '{angle}' must be a number followed by deg, grad, rad or turn"
            )));
        }

        if let Some(link_color) = &theme.link_color {
            require_non_empty(link_color, "theme.link_color")?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.docs.source_dir, "docs.source_dir")?;
        expand::expand_opt(&mut self.docs.output_dir, "docs.output_dir")?;
        expand::expand_opt(&mut self.theme.link_color, "theme.link_color")?;
        self.theme.code_highlight_var =
            expand::expand_env(&self.theme.code_highlight_var, "theme.code_highlight_var")?;
        self.theme.gradient_angle =
            expand::expand_env(&self.theme.gradient_angle, "theme.gradient_angle")?;
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));
        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            output_dir: resolve(self.docs.output_dir.as_deref(), "build"),
        };
    }
}

/// Search `start` and its parents for `ibcdocs.toml`.
fn discover_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}
