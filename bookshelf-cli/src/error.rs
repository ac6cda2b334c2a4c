use thiserror::Error;

use bookshelf_catalog::{CatalogError, ConfigError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Library file or validation failure
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config(e.to_string())
    }
}
