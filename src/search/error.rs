//! Search-specific error types
//!
//! Filtering itself cannot fail; these errors cover malformed search
//! requests.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Both a query and a tag were requested
    #[error("A text query and a tag filter cannot be combined")]
    ConflictingFilters,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
