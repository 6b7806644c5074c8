//! Comment-specific error types

use super::validation::FieldError;
use thiserror::Error;

/// Errors surfaced by the comment commands
#[derive(Debug, Error)]
pub enum CommentError {
    /// One or more fields failed validation
    #[error("Invalid comment: {}", join_messages(.0))]
    Invalid(Vec<FieldError>),

    /// The post to comment on does not exist
    #[error("Cannot comment on unknown post: {0}")]
    UnknownPost(String),

    /// Interactive input could not be read
    #[error("Failed to read input: {0}")]
    PromptError(String),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join("; ")
}
