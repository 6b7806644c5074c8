//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for blogsift using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal reader with live search (default)
//! - **search**: Print posts matching a query
//! - **tag**: Print posts carrying a tag
//! - **render**: Write the blog page as HTML, optionally pre-filtered
//! - **share**: Print or open a share link for a post
//! - **comment**: Write a comment on a post
//! - **config**: Inspect configuration
//!
//! # Examples
//!
//! ```
//! use blogsift::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["blogsift", "search", "go"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use crate::search::{ActiveFilter, SearchError};
use crate::share::Platform;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the path of the config file
    Path,
}

#[derive(Parser, Debug)]
#[command(name = "blogsift")]
#[command(about = "Search, filter and render a static blog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only post ids and suppress informational output
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this config file instead of the default one
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Posts file (TOML or JSON)
    #[arg(long = "posts", value_name = "FILE", global = true)]
    pub posts: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse posts interactively
    #[command(visible_alias = "b")]
    Browse,

    /// Print posts matching a query
    #[command(visible_alias = "s")]
    Search {
        /// Text to look for in titles, excerpts, tags and categories
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Print posts carrying a tag
    #[command(visible_alias = "t")]
    Tag {
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Write the blog page as HTML
    #[command(visible_alias = "r")]
    Render {
        /// Output file (stdout when omitted)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render with this search applied
        #[arg(long = "query", value_name = "QUERY", conflicts_with = "tag")]
        query: Option<String>,

        /// Render with this tag selected
        #[arg(long = "tag", value_name = "TAG")]
        tag: Option<String>,
    },

    /// Print a share link for a post
    Share {
        #[arg(value_name = "POST_ID")]
        post_id: String,

        /// facebook, twitter or linkedin
        #[arg(value_name = "PLATFORM")]
        platform: Platform,

        /// Open the link in the default browser
        #[arg(long = "open")]
        open: bool,
    },

    /// Write a comment on a post
    #[command(visible_alias = "c")]
    Comment {
        #[arg(value_name = "POST_ID")]
        post_id: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// The filter a non-interactive command applies, if any
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ConflictingFilters` for a render request that
    /// names both a query and a tag.
    pub fn filter(&self) -> Result<ActiveFilter, SearchError> {
        match self {
            Self::Search { query } => Ok(ActiveFilter::text(query)),
            Self::Tag { tag } => Ok(ActiveFilter::tag(tag)),
            Self::Render { query, tag, .. } => {
                ActiveFilter::from_request(query.as_deref(), tag.as_deref())
            }
            _ => Ok(ActiveFilter::None),
        }
    }

    /// Whether the command needs the posts file
    #[must_use]
    pub const fn needs_posts(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}
