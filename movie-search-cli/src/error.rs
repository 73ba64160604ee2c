use thiserror::Error;

/// Fatal startup errors. Everything after startup is recovered in place.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be opened
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
