//! Posts-specific error types
//!
//! This module defines the errors that can occur while loading the post
//! collection from disk.
//!
//! # Error Types
//!
//! - **`ReadError`**: The posts file could not be read
//! - **`TomlError`** / **`JsonError`**: The posts file could not be parsed
//! - **`DuplicateId`** / **`EmptyId`**: The collection violates id uniqueness

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading posts
#[derive(Debug, Error)]
pub enum PostsError {
    /// The posts file could not be read
    #[error("Failed to read posts file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The posts file is not valid TOML
    #[error("Invalid TOML in posts file: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The posts file is not valid JSON
    #[error("Invalid JSON in posts file: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two posts share the same identifier
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),

    /// A post has an empty identifier
    #[error("Post #{0} has an empty id")]
    EmptyId(usize),

    /// Lookup of a post that does not exist
    #[error("Post not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
