//! Post matching
//!
//! Pure functions deciding whether a post matches a query or a tag. They
//! never look at render state, so they can be called from tests, the CLI, and
//! the terminal UI alike.

use super::query::{ActiveFilter, Query};
use crate::posts::Post;

/// The lowercased text a query is searched in
///
/// Title, excerpt, every tag, and the category, joined by single spaces.
#[must_use]
pub fn searchable_text(post: &Post) -> String {
    let mut text = format!("{} {} ", post.title, post.excerpt);
    text.push_str(&post.tags.join(" "));
    text.push(' ');
    text.push_str(&post.category);
    text.to_lowercase()
}

/// Exact, case-insensitive substring containment over [`searchable_text`]
///
/// The empty query matches every post.
#[must_use]
pub fn matches(query: &Query, post: &Post) -> bool {
    query.is_empty() || searchable_text(post).contains(query.as_str())
}

/// Tag membership, case-insensitive
#[must_use]
pub fn has_tag(tag: &str, post: &Post) -> bool {
    post.has_tag(tag)
}

/// Whether `post` should be visible under `filter`
#[must_use]
pub fn matches_filter(filter: &ActiveFilter, post: &Post) -> bool {
    match filter {
        ActiveFilter::None => true,
        ActiveFilter::Text(query) => matches(query, post),
        ActiveFilter::Tag(tag) => has_tag(tag, post),
    }
}
