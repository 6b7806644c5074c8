//! Render surface abstraction
//!
//! The search engine computes a [`PageView`]; a [`RenderSurface`] displays it.
//! [`sync`] is the thin adapter between the two, so the engine never touches
//! presentation and surfaces never re-run matching.
//!
//! Implementations:
//! - [`html::HtmlSurface`]: renders the blog page as static HTML
//! - [`crate::ui::state::AppState`]: the interactive terminal reader

pub mod html;

use crate::posts::PostId;
use crate::search::{Highlighted, NoResultsNotice, PageView};

pub use html::HtmlSurface;

/// Something that can display the derived page state
pub trait RenderSurface {
    /// Show or hide one post
    fn set_visible(&mut self, id: &PostId, visible: bool);

    /// Replace a post's title and excerpt with freshly derived markup
    fn set_markup(&mut self, id: &PostId, title: &Highlighted, excerpt: &Highlighted);

    /// Replace the no-results notice (`None` removes it)
    fn show_notice(&mut self, notice: Option<&NoResultsNotice>);

    /// Mark one tag as active (`None` clears it)
    fn set_active_tag(&mut self, tag: Option<&str>);

    /// Bring the post list into view
    fn scroll_to_results(&mut self);
}

/// Push a page view onto a surface
///
/// The notice is always replaced, so a surface never shows more than one.
pub fn sync(view: &PageView, surface: &mut impl RenderSurface) {
    for post in &view.posts {
        surface.set_visible(&post.id, post.visible);
        surface.set_markup(&post.id, &post.title, &post.excerpt);
    }
    surface.show_notice(view.notice.as_ref());
    surface.set_active_tag(view.active_tag.as_deref());
    if view.scroll_to_results {
        surface.scroll_to_results();
    }
}
