//! CLI error types.

use mdweld_config::ConfigError;
use mdweld_includes::IncludeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Include(#[from] IncludeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Walk(#[from] ignore::Error),
}
