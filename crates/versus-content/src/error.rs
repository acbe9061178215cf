//! Error types for content loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur while loading or converting page content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// I/O error reading the content directory or a page file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A page file failed to parse as TOML
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the offending page file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// An authored score lies outside [0, 10]
    #[error("score {value} for entity '{entity}' on '{dimension}' is outside [0, 10]")]
    ScoreOutOfRange {
        /// Dimension label carrying the bad score
        dimension: String,
        /// Entity key the score was authored for
        entity: String,
        /// The out-of-range value
        value: f64,
    },

    /// The requested page slug does not exist in the catalog
    #[error("no page with slug '{0}' in the catalog")]
    UnknownSlug(String),
}
