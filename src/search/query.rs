//! Query normalization and the active filter
//!
//! Raw input from the search box is lowercased and trimmed before it is
//! matched against posts. An empty normalized query means "no filter".

use super::error::SearchError;
use std::fmt;

/// A normalized (lowercased, trimmed) search query
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Normalize raw user input
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, not bytes
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The filter currently applied to the post list
///
/// Text search and tag selection are mutually exclusive: selecting a tag
/// replaces any text query and typing replaces any selected tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    /// Every post is shown
    #[default]
    None,
    /// Substring search over title, excerpt, tags and category
    Text(Query),
    /// Tag membership, stored lowercased
    Tag(String),
}

impl ActiveFilter {
    /// Build a text filter, collapsing an empty query to [`ActiveFilter::None`]
    #[must_use]
    pub fn text(raw: &str) -> Self {
        let query = Query::normalize(raw);
        if query.is_empty() {
            Self::None
        } else {
            Self::Text(query)
        }
    }

    /// Build a tag filter, collapsing a blank tag to [`ActiveFilter::None`]
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() { Self::None } else { Self::Tag(tag) }
    }

    /// Build the filter of a one-shot request naming a query, a tag, or neither
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ConflictingFilters` when both a query and a tag
    /// are given.
    pub fn from_request(query: Option<&str>, tag: Option<&str>) -> Result<Self, SearchError> {
        let text = query.map_or(Self::None, Self::text);
        let tag = tag.map_or(Self::None, Self::tag);
        match (text.is_none(), tag.is_none()) {
            (false, false) => Err(SearchError::ConflictingFilters),
            (true, _) => Ok(tag),
            (false, true) => Ok(text),
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The text shown to the user for this filter (query or tag)
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text(query) => Some(query.as_str()),
            Self::Tag(tag) => Some(tag),
        }
    }

    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}
