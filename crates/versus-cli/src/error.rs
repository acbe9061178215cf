//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content loading error
    #[error("Content error: {0}")]
    Content(#[from] versus_content::ContentError),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(#[from] versus_render::RenderError),

    /// Ranking error
    #[error("Ranking error: {0}")]
    Ranking(#[from] versus_domain::RankingError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog failed validation
    #[error("Content validation failed with {0} error(s)")]
    ValidationFailed(usize),
}
