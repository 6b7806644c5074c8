//! UI error types

use thiserror::Error;

/// Errors that can occur in the terminal reader
#[derive(Debug, Error)]
pub enum UiError {
    /// stdin or stdout is not a terminal
    #[error("The reader needs an interactive terminal")]
    NotATerminal,

    /// The posts file has nothing to browse
    #[error("No posts to browse")]
    NoPosts,

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
