//! Post collection loading
//!
//! Loads the blog's posts from a TOML or JSON file into an immutable
//! [`PostStore`]. The store is the single source of truth that search passes
//! run over; nothing in the engine writes back to it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub mod error;
pub mod types;

pub use error::PostsError;
pub use types::{Comment, Post, PostId, PostsFile, Site};

/// Supported posts file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostsFormat {
    Toml,
    Json,
}

impl PostsFormat {
    /// Pick the format from a file extension (`.json` is JSON, everything else TOML)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Immutable, validated collection of posts
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    site: Site,
    posts: Vec<Post>,
}

impl PostStore {
    /// Build a store from already-parsed posts
    ///
    /// # Errors
    ///
    /// Returns `PostsError::EmptyId` or `PostsError::DuplicateId` if post ids are
    /// not unique and non-empty.
    pub fn new(site: Site, posts: Vec<Post>) -> Result<Self, PostsError> {
        let mut seen = HashSet::new();
        for (index, post) in posts.iter().enumerate() {
            if post.id.as_str().trim().is_empty() {
                return Err(PostsError::EmptyId(index));
            }
            if !seen.insert(post.id.as_str().to_string()) {
                return Err(PostsError::DuplicateId(post.id.to_string()));
            }
        }
        Ok(Self { site, posts })
    }

    /// Load a posts file, choosing the parser from its extension
    ///
    /// # Errors
    ///
    /// Returns `PostsError` if the file cannot be read or parsed, or if the
    /// posts fail validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PostsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PostsError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let store = match PostsFormat::from_path(path) {
            PostsFormat::Toml => Self::from_toml_str(&content)?,
            PostsFormat::Json => Self::from_json_str(&content)?,
        };

        tracing::info!(path = %path.display(), posts = store.len(), "loaded posts");
        Ok(store)
    }

    /// Parse a TOML posts document
    ///
    /// # Errors
    ///
    /// Returns `PostsError` on parse or validation failure.
    pub fn from_toml_str(content: &str) -> Result<Self, PostsError> {
        let file: PostsFile = toml::from_str(content)?;
        Self::new(file.site, file.posts)
    }

    /// Parse a JSON posts document
    ///
    /// # Errors
    ///
    /// Returns `PostsError` on parse or validation failure.
    pub fn from_json_str(content: &str) -> Result<Self, PostsError> {
        let file: PostsFile = serde_json::from_str(content)?;
        Self::new(file.site, file.posts)
    }

    #[must_use]
    pub const fn site(&self) -> &Site {
        &self.site
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by id
    ///
    /// # Errors
    ///
    /// Returns `PostsError::NotFound` if no post has this id.
    pub fn get(&self, id: &str) -> Result<&Post, PostsError> {
        self.posts
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| PostsError::NotFound(id.to_string()))
    }

    /// Every distinct tag (compared case-insensitively), in first-seen order
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter())
            .filter(|tag| seen.insert(tag.to_lowercase()))
            .cloned()
            .collect()
    }

    /// Consume the store, returning the posts in order
    #[must_use]
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_posts;
    use std::path::PathBuf;

    const POSTS_TOML: &str = r#"
        [site]
        title = "CodeSphere Blog"
        url = "https://example.com/blog/"

        [[posts]]
        id = "post-1"
        title = "Intro to Go"
        excerpt = "Getting started with Go."
        tags = ["go", "backend"]
        category = "programming"

        [[posts.comments]]
        author = "Sam"
        text = "Great intro!"

        [[posts]]
        id = "post-2"
        title = "CSS Tricks"
        tags = ["css", "Go"]
    "#;

    #[test]
    fn test_from_toml_str() {
        let store = PostStore::from_toml_str(POSTS_TOML).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.site().title, "CodeSphere Blog");
        assert_eq!(store.posts()[0].comments.len(), 1);
        assert_eq!(store.posts()[1].excerpt, "");
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"posts": [{"id": "a", "title": "A", "tags": ["x"]}]}"#;
        let store = PostStore::from_json_str(json).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.site(), &Site::default());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let posts = vec![
            Post::new("same", "One", "", vec![], ""),
            Post::new("same", "Two", "", vec![], ""),
        ];
        let result = PostStore::new(Site::default(), posts);
        assert!(matches!(result, Err(PostsError::DuplicateId(id)) if id == "same"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let posts = vec![Post::new("ok", "One", "", vec![], ""), Post::new("  ", "Two", "", vec![], "")];
        let result = PostStore::new(Site::default(), posts);
        assert!(matches!(result, Err(PostsError::EmptyId(1))));
    }

    #[test]
    fn test_get() {
        let store = PostStore::new(Site::default(), sample_posts()).unwrap();
        assert_eq!(store.get("intro-go").unwrap().title, "Intro to Go");
        assert!(matches!(store.get("missing"), Err(PostsError::NotFound(_))));
    }

    #[test]
    fn test_all_tags_dedups_case_insensitively() {
        let store = PostStore::from_toml_str(POSTS_TOML).unwrap();
        assert_eq!(store.all_tags(), vec!["go", "backend", "css"]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(PostsFormat::from_path(&PathBuf::from("posts.json")), PostsFormat::Json);
        assert_eq!(PostsFormat::from_path(&PathBuf::from("posts.JSON")), PostsFormat::Json);
        assert_eq!(PostsFormat::from_path(&PathBuf::from("posts.toml")), PostsFormat::Toml);
        assert_eq!(PostsFormat::from_path(&PathBuf::from("posts")), PostsFormat::Toml);
    }

    #[test]
    fn test_load_missing_file() {
        let result = PostStore::load("definitely/not/here.toml");
        assert!(matches!(result, Err(PostsError::ReadError { .. })));
    }
}
