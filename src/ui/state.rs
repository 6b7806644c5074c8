//! Application state for the reader
//!
//! [`AppState`] is the terminal's render surface: [`crate::render::sync`]
//! pushes the derived page view into it, and the draw code reads it back.
//! It also owns the purely presentational state (cursor, scroll offset, the
//! search input as typed, the tag menu and the status line).

use crate::comments::Field;
use crate::page::{
    HOME_LINK, MobileMenu, Navigation, PageMetrics, ScrollEffects, ScrollTopButton, Section,
    Viewport,
};
use crate::posts::{Post, PostId};
use crate::render::RenderSurface;
use crate::schedule::Expiring;
use crate::search::{Highlighted, NoResultsNotice};
use std::time::{Duration, Instant};

/// Rows taken by one post card: title, excerpt, tags, spacing
pub const CARD_ROWS: u32 = 4;

/// How long status messages stay up
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Current mode of the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Moving between posts
    #[default]
    Normal,
    /// Search input has focus
    Search,
    /// Help overlay is visible
    Help,
    /// Comment form of the current post has focus
    Comment,
    /// Share links of the current post are showing
    Share,
}

/// Message level of a status line entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A status line entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// What the surface currently shows for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub id: PostId,
    pub visible: bool,
    pub title: Highlighted,
    pub excerpt: Highlighted,
    pub tags: Vec<String>,
    pub category: String,
}

impl PostRow {
    fn new(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            visible: true,
            title: Highlighted::plain(&post.title),
            excerpt: Highlighted::plain(&post.excerpt),
            tags: post.tags.clone(),
            category: post.category.clone(),
        }
    }
}

/// Application state for the reader
#[derive(Debug)]
pub struct AppState {
    /// One row per post, in page order
    pub rows: Vec<PostRow>,
    /// Text of the no-results notice, if one is showing
    pub notice: Option<String>,
    pub active_tag: Option<String>,
    pub mode: Mode,
    /// Search input as typed
    pub query: String,
    /// Byte offset of the input cursor
    pub query_cursor: usize,
    /// The whole input is selected; typing replaces it
    pub query_selected: bool,
    /// Cursor position among the visible posts
    pub cursor: usize,
    /// First row of the post list on screen
    pub scroll_offset: u32,
    /// Height of the post list area (set during render)
    pub list_height: u32,
    pub menu: MobileMenu,
    /// Every tag on the page, for the tag menu
    pub tags: Vec<String>,
    pub tag_cursor: usize,
    pub nav: Navigation,
    pub effects: ScrollEffects,
    pub scroll_top: ScrollTopButton,
    /// Focused field of the comment form
    pub comment_field: Field,
    pub status: Option<Expiring<StatusMessage>>,
    pub should_exit: bool,
}

impl AppState {
    #[must_use]
    pub fn new(posts: &[Post], tags: Vec<String>) -> Self {
        let metrics = PageMetrics::ROWS;
        let mut state = Self {
            rows: posts.iter().map(PostRow::new).collect(),
            notice: None,
            active_tag: None,
            mode: Mode::Normal,
            query: String::new(),
            query_cursor: 0,
            query_selected: false,
            cursor: 0,
            scroll_offset: 0,
            list_height: 20,
            menu: MobileMenu::default(),
            tags,
            tag_cursor: 0,
            nav: Navigation::new(posts.iter().map(|p| p.id.as_str()), metrics),
            effects: ScrollEffects::new(posts.len(), metrics),
            scroll_top: ScrollTopButton::new(&metrics),
            comment_field: Field::Name,
            status: None,
            should_exit: false,
        };
        state.refresh_scroll();
        state
    }

    /// Visible rows with their index in [`Self::rows`]
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &PostRow)> {
        self.rows.iter().enumerate().filter(|(_, row)| row.visible)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    /// Index into [`Self::rows`] of the post under the cursor
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.visible_rows().nth(self.cursor).map(|(index, _)| index)
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&PostId> {
        self.current_index().map(|index| &self.rows[index].id)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_count() {
            self.cursor += 1;
        }
        self.refresh_scroll();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.refresh_scroll();
    }

    /// Follow the home link back to the first post
    pub fn jump_to_top(&mut self) {
        let sections = self.visible_sections();
        self.scroll_offset = self
            .nav
            .click(HOME_LINK, &sections)
            .unwrap_or(ScrollTopButton::TARGET);
        self.cursor = 0;
        self.refresh_scroll();
    }

    pub fn set_list_height(&mut self, height: u32) {
        if self.list_height != height {
            self.list_height = height;
            self.refresh_scroll();
        }
    }

    /// Layout box of every post, `None` for hidden ones
    #[must_use]
    pub fn sections(&self) -> Vec<Option<Section>> {
        let mut top = 0;
        self.rows
            .iter()
            .map(|row| {
                row.visible.then(|| {
                    let section = Section::new(row.id.as_str(), top, CARD_ROWS);
                    top += CARD_ROWS;
                    section
                })
            })
            .collect()
    }

    fn visible_sections(&self) -> Vec<Section> {
        self.sections().into_iter().flatten().collect()
    }

    /// Keep the cursor on screen, then update navigation and reveals
    pub fn refresh_scroll(&mut self) {
        let count = self.visible_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));

        let cursor_top = u32::try_from(self.cursor).unwrap_or(u32::MAX).saturating_mul(CARD_ROWS);
        let cursor_bottom = cursor_top.saturating_add(CARD_ROWS);
        if cursor_top < self.scroll_offset {
            self.scroll_offset = cursor_top;
        } else if cursor_bottom > self.scroll_offset.saturating_add(self.list_height) {
            self.scroll_offset = cursor_bottom.saturating_sub(self.list_height);
        }

        let sections = self.sections();
        let visible: Vec<Section> = sections.iter().flatten().cloned().collect();
        self.nav.on_scroll(self.scroll_offset, &visible);

        let viewport = Viewport {
            scroll_y: self.scroll_offset,
            height: self.list_height,
        };
        let revealed = self.effects.on_scroll(&sections, viewport);
        if !revealed.is_empty() {
            tracing::trace!(?revealed, "posts revealed");
        }
    }

    /// Whether the post at `index` in [`Self::rows`] has scrolled into view
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.effects.is_revealed(index)
    }

    #[must_use]
    pub fn show_scroll_top(&self) -> bool {
        self.scroll_top.is_visible(self.scroll_offset)
    }

    /// Focus the search input with its text selected
    pub fn focus_query(&mut self) {
        self.mode = Mode::Search;
        self.query_cursor = self.query.len();
        self.query_selected = !self.query.is_empty();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.query_selected = false;
    }

    pub fn insert_char(&mut self, c: char) {
        if self.query_selected {
            self.clear_query();
        }
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Delete before the cursor, or the whole selection
    pub fn delete_char(&mut self) {
        if self.query_selected {
            self.clear_query();
            return;
        }
        if let Some(c) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= c.len_utf8();
            self.query.remove(self.query_cursor);
        }
    }

    pub fn query_cursor_left(&mut self) {
        self.query_selected = false;
        if let Some(c) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= c.len_utf8();
        }
    }

    pub fn query_cursor_right(&mut self) {
        self.query_selected = false;
        if let Some(c) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += c.len_utf8();
        }
    }

    /// Open or close the tag menu, pointing at the active tag
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        if self.menu.is_open() {
            self.tag_cursor = self
                .active_tag
                .as_ref()
                .and_then(|active| self.tags.iter().position(|t| t == active))
                .unwrap_or(0);
        }
    }

    pub fn tag_cursor_down(&mut self) {
        if self.tag_cursor + 1 < self.tags.len() {
            self.tag_cursor += 1;
        }
    }

    pub fn tag_cursor_up(&mut self) {
        self.tag_cursor = self.tag_cursor.saturating_sub(1);
    }

    #[must_use]
    pub fn menu_tag(&self) -> Option<&str> {
        self.tags.get(self.tag_cursor).map(String::as_str)
    }

    pub fn set_status(&mut self, level: MessageLevel, text: impl Into<String>, now: Instant) {
        let message = StatusMessage {
            level,
            text: text.into(),
        };
        self.status = Some(Expiring::new(message, now, MESSAGE_TTL));
    }

    /// The status message, unless it has expired
    #[must_use]
    pub fn status(&self, now: Instant) -> Option<&StatusMessage> {
        self.status.as_ref().and_then(|s| s.get(now))
    }

    /// Drop the status message once it has expired
    ///
    /// Returns `true` if a message was dropped.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
            true
        } else {
            false
        }
    }

    fn row_mut(&mut self, id: &PostId) -> Option<&mut PostRow> {
        self.rows.iter_mut().find(|row| &row.id == id)
    }
}

impl RenderSurface for AppState {
    fn set_visible(&mut self, id: &PostId, visible: bool) {
        if let Some(row) = self.row_mut(id) {
            row.visible = visible;
        }
    }

    fn set_markup(&mut self, id: &PostId, title: &Highlighted, excerpt: &Highlighted) {
        if let Some(row) = self.row_mut(id) {
            row.title = title.clone();
            row.excerpt = excerpt.clone();
        }
    }

    fn show_notice(&mut self, notice: Option<&NoResultsNotice>) {
        self.notice = notice.map(NoResultsNotice::message);
    }

    fn set_active_tag(&mut self, tag: Option<&str>) {
        self.active_tag = tag.map(str::to_string);
    }

    fn scroll_to_results(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sync;
    use crate::search::{ActiveFilter, PageView};
    use crate::testing::sample_posts;

    fn state() -> AppState {
        let tags = vec!["backend".into(), "css".into(), "design".into(), "go".into()];
        AppState::new(&sample_posts(), tags)
    }

    #[test]
    fn test_new_shows_every_post_revealed() {
        let state = state();
        assert_eq!(state.visible_count(), 3);
        assert_eq!(state.current_id().map(PostId::as_str), Some("intro-go"));
        assert!((0..3).all(|i| state.is_revealed(i)));
        assert_eq!(state.nav.active(), HOME_LINK);
    }

    #[test]
    fn test_sync_hides_posts_and_clamps_cursor() {
        let posts = sample_posts();
        let mut state = state();
        state.cursor = 2;

        sync(&PageView::build(&ActiveFilter::text("trick"), &posts, 2), &mut state);
        state.refresh_scroll();

        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.current_id().map(PostId::as_str), Some("css-tricks"));
        assert_eq!(state.rows[1].title.mark_count(), 1);
    }

    #[test]
    fn test_sync_notice_and_active_tag() {
        let posts = sample_posts();
        let mut state = state();

        sync(&PageView::build(&ActiveFilter::text("haskell"), &posts, 2), &mut state);
        assert!(state.notice.as_deref().is_some_and(|n| n.contains("haskell")));

        sync(&PageView::build(&ActiveFilter::tag("go"), &posts, 2), &mut state);
        assert_eq!(state.notice, None);
        assert_eq!(state.active_tag.as_deref(), Some("go"));
    }

    #[test]
    fn test_hidden_posts_take_no_rows() {
        let posts = sample_posts();
        let mut state = state();
        sync(&PageView::build(&ActiveFilter::text("css"), &posts, 2), &mut state);

        let sections = state.sections();
        assert_eq!(sections[0], None);
        assert_eq!(sections[1].as_ref().map(|s| s.top), Some(0));
        assert_eq!(sections[2].as_ref().map(|s| s.top), Some(CARD_ROWS));
    }

    #[test]
    fn test_scrolling_moves_active_link() {
        let mut state = state();
        state.set_list_height(CARD_ROWS * 2);

        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 2);
        assert_eq!(state.scroll_offset, CARD_ROWS);
        assert_eq!(state.nav.active(), "#css-tricks");

        state.cursor_down();
        assert_eq!(state.cursor, 2);

        state.jump_to_top();
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.nav.active(), HOME_LINK);
    }

    #[test]
    fn test_reveal_waits_for_scroll() {
        let mut state = state();
        state.list_height = CARD_ROWS;
        state.effects = ScrollEffects::new(3, PageMetrics::ROWS);
        state.refresh_scroll();

        assert!(state.is_revealed(0));
        assert!(!state.is_revealed(2));

        state.cursor_down();
        state.cursor_down();
        assert!(state.is_revealed(2));
    }

    #[test]
    fn test_focus_selects_query_and_typing_replaces_it() {
        let mut state = state();
        for c in "css".chars() {
            state.insert_char(c);
        }

        state.focus_query();
        assert!(state.query_selected);

        state.insert_char('g');
        assert_eq!(state.query, "g");
        assert_eq!(state.query_cursor, 1);
    }

    #[test]
    fn test_query_editing_respects_char_boundaries() {
        let mut state = state();
        for c in "café".chars() {
            state.insert_char(c);
        }
        state.query_cursor_left();
        state.delete_char();
        assert_eq!(state.query, "caé");

        state.query_cursor_right();
        state.query_cursor_right();
        state.delete_char();
        assert_eq!(state.query, "ca");
    }

    #[test]
    fn test_menu_points_at_active_tag() {
        let mut state = state();
        state.active_tag = Some("go".into());

        state.toggle_menu();
        assert!(state.menu.is_open());
        assert_eq!(state.menu_tag(), Some("go"));

        state.tag_cursor_down();
        assert_eq!(state.menu_tag(), Some("go"));
        state.tag_cursor_up();
        assert_eq!(state.menu_tag(), Some("design"));
    }

    #[test]
    fn test_status_expires() {
        let now = Instant::now();
        let mut state = state();
        state.set_status(MessageLevel::Info, "hello", now);

        assert!(state.status(now).is_some());
        assert!(state.status(now + MESSAGE_TTL).is_none());
    }

    #[test]
    fn test_expire_status_drops_old_message() {
        let now = Instant::now();
        let mut state = state();
        state.set_status(MessageLevel::Info, "hello", now);

        assert!(!state.expire_status(now + Duration::from_secs(1)));
        assert!(state.status.is_some());
        assert!(state.expire_status(now + MESSAGE_TTL));
        assert!(state.status.is_none());
        assert!(!state.expire_status(now + MESSAGE_TTL));
    }
}
