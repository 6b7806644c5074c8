//! Blogsift - client-side behaviour of a static blog page, as plain Rust
//!
//! This library models the interactive layer of a blog page (search with
//! debouncing, tag filtering, match highlighting, the no-results notice,
//! simulated comment posting, share links, menu and navigation state) over an
//! immutable collection of posts. Render surfaces (static HTML, terminal UI)
//! consume the derived state through [`render::RenderSurface`].

use thiserror::Error;

pub mod cli;
pub mod comments;
pub mod config;
pub mod keybinds;
pub mod markup;
pub mod output;
pub mod page;
pub mod posts;
pub mod render;
pub mod schedule;
pub mod search;
pub mod share;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BlogError {
    /// Posts file could not be loaded
    #[error("Posts error: {0}")]
    PostsError(#[from] posts::PostsError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Comment submission error
    #[error("Comment error: {0}")]
    CommentError(#[from] comments::CommentError),
    /// Share link error
    #[error("Share error: {0}")]
    ShareError(#[from] share::ShareError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
