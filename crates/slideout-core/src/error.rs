//! Error types for sidebar configuration.

use thiserror::Error;

/// Errors that can occur while interpreting sidebar configuration.
#[derive(Debug, Error)]
pub enum SlideoutError {
    /// Size token is not one of `sm`, `md`, `lg`, `xlg`, `full`.
    #[error("unknown size: {0}")]
    UnknownSize(String),

    /// Position token is not `left` or `right`.
    #[error("unknown position: {0}")]
    UnknownPosition(String),

    /// Transition token is not one of `fast`, `slow`, `easy`, `dragging`.
    #[error("unknown transition: {0}")]
    UnknownTransition(String),

    /// CSS length could not be parsed.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Options document failed to deserialize.
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, SlideoutError>;
