//! Derived page state
//!
//! A [`PageView`] is everything a render surface needs after a filter pass:
//! per-post visibility and highlight markup, the active tag, the no-results
//! notice, and whether the page should scroll to the results.

use super::filter::{FilterOutcome, filter_pass};
use super::highlight::{Highlighted, highlight};
use super::notice::NoResultsNotice;
use super::query::ActiveFilter;
use crate::posts::{Post, PostId};

/// Derived state of one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub id: PostId,
    pub visible: bool,
    pub title: Highlighted,
    pub excerpt: Highlighted,
}

/// Derived state of the whole post list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub posts: Vec<PostView>,
    pub notice: Option<NoResultsNotice>,
    pub active_tag: Option<String>,
    pub any_match: bool,
    /// Set by tag selection; surfaces scroll the post list into view
    pub scroll_to_results: bool,
}

impl PageView {
    /// Everything visible, nothing marked
    #[must_use]
    pub fn unfiltered(posts: &[Post]) -> Self {
        Self::build(&ActiveFilter::None, posts, usize::MAX)
    }

    /// Run a filter pass and derive the full view from it
    #[must_use]
    pub fn build(filter: &ActiveFilter, posts: &[Post], min_highlight_len: usize) -> Self {
        let outcome = filter_pass(filter, posts);
        Self::from_outcome(filter, posts, &outcome, min_highlight_len)
    }

    /// Derive the view from an already computed pass
    ///
    /// Highlights are re-derived from the original post text for visible
    /// posts under a text filter only; everything else is unmarked.
    #[must_use]
    pub fn from_outcome(
        filter: &ActiveFilter,
        posts: &[Post],
        outcome: &FilterOutcome,
        min_highlight_len: usize,
    ) -> Self {
        let views = posts
            .iter()
            .zip(&outcome.visibility)
            .map(|(post, &visible)| {
                let (title, excerpt) = match filter {
                    ActiveFilter::Text(query) if visible => (
                        highlight(&post.title, query, min_highlight_len),
                        highlight(&post.excerpt, query, min_highlight_len),
                    ),
                    _ => (Highlighted::plain(&post.title), Highlighted::plain(&post.excerpt)),
                };
                PostView {
                    id: post.id.clone(),
                    visible,
                    title,
                    excerpt,
                }
            })
            .collect();

        Self {
            posts: views,
            notice: NoResultsNotice::for_pass(filter.label(), outcome.any_match),
            active_tag: filter.active_tag().map(str::to_string),
            any_match: outcome.any_match,
            scroll_to_results: matches!(filter, ActiveFilter::Tag(_)),
        }
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.posts.iter().filter(|p| p.visible).count()
    }

    /// Ids of visible posts, in order
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&PostId> {
        self.posts.iter().filter(|p| p.visible).map(|p| &p.id).collect()
    }

    #[must_use]
    pub fn get(&self, id: &PostId) -> Option<&PostView> {
        self.posts.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::highlight::Segment;
    use crate::testing::{css_tricks, intro_go, sample_posts};

    #[test]
    fn test_unfiltered() {
        let posts = sample_posts();
        let view = PageView::unfiltered(&posts);

        assert_eq!(view.visible_count(), 3);
        assert!(view.notice.is_none());
        assert!(view.active_tag.is_none());
        assert!(view.posts.iter().all(|p| p.title.mark_count() == 0));
    }

    #[test]
    fn test_go_example() {
        let posts = vec![intro_go(), css_tricks()];
        let view = PageView::build(&ActiveFilter::text("go"), &posts, 1);

        assert!(view.posts[0].visible);
        assert!(!view.posts[1].visible);
        assert!(view.posts[0].title.segments().contains(&Segment::Mark("Go".into())));
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_hidden_posts_are_unmarked() {
        let posts = vec![intro_go(), css_tricks()];
        let view = PageView::build(&ActiveFilter::text("tricks"), &posts, 2);

        assert!(!view.posts[0].visible);
        assert_eq!(view.posts[0].title.mark_count(), 0);
        assert_eq!(view.posts[1].title.mark_count(), 1);
    }

    #[test]
    fn test_tag_view_scrolls_and_does_not_mark() {
        let posts = sample_posts();
        let view = PageView::build(&ActiveFilter::tag("css"), &posts, 2);

        assert!(view.scroll_to_results);
        assert_eq!(view.active_tag.as_deref(), Some("css"));
        assert!(view.posts.iter().all(|p| p.title.mark_count() == 0));
    }

    #[test]
    fn test_zero_match_notice() {
        let posts = sample_posts();
        let view = PageView::build(&ActiveFilter::text("Haskell"), &posts, 2);

        assert_eq!(view.visible_count(), 0);
        assert_eq!(view.notice, Some(NoResultsNotice::new("haskell")));
    }

    #[test]
    fn test_visible_ids_and_get() {
        let posts = sample_posts();
        let view = PageView::build(&ActiveFilter::tag("design"), &posts, 2);

        let ids: Vec<&str> = view.visible_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["design-systems"]);
        assert!(!view.get(&PostId::new("intro-go")).unwrap().visible);
    }
}
