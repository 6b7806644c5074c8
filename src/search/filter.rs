//! Filter passes over the post collection
//!
//! A filter pass recomputes visibility for every post under one
//! [`ActiveFilter`]. It only computes; applying the result to a page is the
//! job of [`crate::render::sync`].
//!
//! # Iterator Adapters
//!
//! [`PostFilterExt`] adds fluent filtering to iterators of posts, used by the
//! CLI listing commands:
//!
//! ```ignore
//! use blogsift::search::filter::PostFilterExt;
//!
//! let hits: Vec<&Post> = store.posts().iter().filter_query("go");
//! ```

use super::matcher::matches_filter;
use super::query::ActiveFilter;
use crate::posts::Post;

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Visibility per post, in collection order
    pub visibility: Vec<bool>,
    /// Whether at least one post is visible
    pub any_match: bool,
}

impl FilterOutcome {
    /// Number of visible posts
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|v| **v).count()
    }
}

/// Compute visibility of every post under `filter`
///
/// With [`ActiveFilter::None`] every post is visible.
#[must_use]
pub fn filter_pass(filter: &ActiveFilter, posts: &[Post]) -> FilterOutcome {
    let visibility: Vec<bool> = posts.iter().map(|post| matches_filter(filter, post)).collect();
    let any_match = visibility.iter().any(|v| *v);
    tracing::debug!(
        filter = ?filter,
        visible = visibility.iter().filter(|v| **v).count(),
        total = posts.len(),
        "filter pass"
    );
    FilterOutcome { visibility, any_match }
}

/// Extension trait for filtering iterators of posts
pub trait PostFilterExt<'a>: IntoIterator<Item = &'a Post> + Sized {
    /// Keep posts matching `filter`
    fn filter_active(self, filter: &ActiveFilter) -> Vec<&'a Post> {
        self.into_iter().filter(|post| matches_filter(filter, post)).collect()
    }

    /// Keep posts whose searchable text contains the normalized `raw` query
    fn filter_query(self, raw: &str) -> Vec<&'a Post> {
        self.filter_active(&ActiveFilter::text(raw))
    }

    /// Keep posts carrying `tag`
    fn filter_tag(self, tag: &str) -> Vec<&'a Post> {
        self.filter_active(&ActiveFilter::tag(tag))
    }
}

impl<'a, I> PostFilterExt<'a> for I where I: IntoIterator<Item = &'a Post> {}
