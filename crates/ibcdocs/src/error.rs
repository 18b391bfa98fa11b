//! CLI error types.

use ibcdocs_config::ConfigError;

use crate::site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{warnings} warning(s) in strict mode")]
    Strict { warnings: usize },
}
