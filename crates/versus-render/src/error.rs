//! Render error types

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The comparison block could not be ranked
    #[error("ranking error: {0}")]
    Ranking(#[from] versus_domain::RankingError),

    /// The comparison block could not be converted to a domain table
    #[error("content error: {0}")]
    Content(#[from] versus_content::ContentError),
}
