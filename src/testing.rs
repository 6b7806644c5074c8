//! Testing utilities for blogsift
//!
//! Shared post fixtures and a [`RecordingSurface`] that remembers what a
//! [`sync`](crate::render::sync) pushed to it.
//!
//! Only available when compiled with `cfg(test)`.

use crate::posts::{Comment, Post, PostId, Site};
use crate::render::RenderSurface;
use crate::search::{Highlighted, NoResultsNotice};
use std::collections::HashMap;

/// "Intro to Go", tagged `go` and `backend`, with one comment
#[must_use]
pub fn intro_go() -> Post {
    let mut post = Post::new(
        "intro-go",
        "Intro to Go",
        "Getting started with goroutines and channels.",
        vec!["go".into(), "backend".into()],
        "programming",
    );
    post.author = "Alex Chen".into();
    post.date = "March 3, 2025".into();
    post.comments = vec![Comment::new(
        "Sam",
        "Great intro to channels!",
        "March 4, 2025 at 10:15 AM",
    )];
    post
}

/// "CSS Tricks", tagged `css`
#[must_use]
pub fn css_tricks() -> Post {
    Post::new(
        "css-tricks",
        "CSS Tricks",
        "Layouts with grid and flexbox.",
        vec!["css".into()],
        "frontend",
    )
}

/// "Design Systems at Scale", tagged `design` and `css`
#[must_use]
pub fn design_systems() -> Post {
    Post::new(
        "design-systems",
        "Design Systems at Scale",
        "Tokens, components and shared styles for large teams.",
        vec!["design".into(), "css".into()],
        "design",
    )
}

/// The three fixture posts, in page order
#[must_use]
pub fn sample_posts() -> Vec<Post> {
    vec![intro_go(), css_tricks(), design_systems()]
}

#[must_use]
pub fn sample_site() -> Site {
    Site {
        title: "CodeSphere Blog".into(),
        url: "https://blog.example.com/".into(),
    }
}

/// Render surface that records every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub visible: HashMap<PostId, bool>,
    pub markup_updates: usize,
    /// Query of the notice currently shown
    pub notice: Option<String>,
    pub notice_calls: usize,
    pub active_tag: Option<String>,
    pub scrolls: usize,
}

impl RenderSurface for RecordingSurface {
    fn set_visible(&mut self, id: &PostId, visible: bool) {
        self.visible.insert(id.clone(), visible);
    }

    fn set_markup(&mut self, _id: &PostId, _title: &Highlighted, _excerpt: &Highlighted) {
        self.markup_updates += 1;
    }

    fn show_notice(&mut self, notice: Option<&NoResultsNotice>) {
        self.notice = notice.map(|n| n.query().to_string());
        self.notice_calls += 1;
    }

    fn set_active_tag(&mut self, tag: Option<&str>) {
        self.active_tag = tag.map(str::to_string);
    }

    fn scroll_to_results(&mut self) {
        self.scrolls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::PostStore;

    #[test]
    fn test_sample_posts_form_a_valid_store() {
        let store = PostStore::new(sample_site(), sample_posts()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.all_tags(), vec!["go", "backend", "css", "design"]);
    }

    #[test]
    fn test_only_intro_go_mentions_go() {
        let hits: Vec<Post> = sample_posts()
            .into_iter()
            .filter(|p| crate::search::searchable_text(p).contains("go"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "intro-go");
    }
}
