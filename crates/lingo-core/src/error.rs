use thiserror::Error;

/// Top-level error type for Lingo.
#[derive(Debug, Error)]
pub enum LingoError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// String catalog could not be loaded or parsed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Analytics backend error.
    #[error("analytics error: {0}")]
    Analytics(String),

    /// Feedback submission error.
    #[error("feedback error: {0}")]
    Feedback(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
