//! Post record types
//!
//! A [`Post`] holds the searchable fields of one blog entry. Posts are loaded
//! once and never mutated; visibility and highlight markup are derived per
//! filter pass and live in [`crate::search::PageView`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post, also used as its in-page anchor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `#id` fragment used by navigation links
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A comment attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    /// Human-readable timestamp as shown on the page
    #[serde(default)]
    pub posted_at: String,
}

impl Comment {
    #[must_use]
    pub fn new(author: impl Into<String>, text: impl Into<String>, posted_at: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            posted_at: posted_at.into(),
        }
    }
}

/// One blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a post with the searchable fields set and no metadata
    #[must_use]
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        tags: Vec<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            tags,
            category: category.into(),
            author: String::new(),
            date: String::new(),
            comments: Vec::new(),
        }
    }

    /// Check tag membership, ignoring case
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Site-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub title: String,
    /// Page URL that post anchors are appended to
    #[serde(default)]
    pub url: String,
}

/// On-disk layout of a posts file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsFile {
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_anchor() {
        let id = PostId::new("post-1");
        assert_eq!(id.anchor(), "#post-1");
        assert_eq!(id.to_string(), "post-1");
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let post = Post::new("p", "Title", "", vec!["Go".into(), "backend".into()], "");
        assert!(post.has_tag("go"));
        assert!(post.has_tag("BACKEND"));
        assert!(!post.has_tag("css"));
    }

    #[test]
    fn test_has_tag_is_whole_tag() {
        let post = Post::new("p", "Title", "", vec!["golang".into()], "");
        assert!(!post.has_tag("go"));
    }

    #[test]
    fn test_post_deserialize_defaults() {
        let post: Post = toml::from_str(
            r#"
            id = "only-title"
            title = "Only a title"
        "#,
        )
        .unwrap();

        assert_eq!(post.id.as_str(), "only-title");
        assert!(post.tags.is_empty());
        assert!(post.comments.is_empty());
        assert_eq!(post.category, "");
    }
}
