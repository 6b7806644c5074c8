//! Search session state machine
//!
//! Owns the post collection, the raw search input, the active filter and the
//! debounced pass, and keeps a [`PageView`] in sync with them.
//!
//! # Workflow
//!
//! ```text
//! Idle ──input──▶ Filtering(pending) ──tick after debounce──▶ Matched | NoResults
//!   ▲                 │   ▲                                        │
//!   │                 └───┘ more input replaces the pending pass   │
//!   └──────────────────────────── clear (Esc) ◀────────────────────┘
//! ```
//!
//! Text search and tag selection are mutually exclusive: selecting a tag
//! cancels the pending pass and empties the input, and typing clears the tag.

use super::query::ActiveFilter;
use super::view::PageView;
use crate::posts::Post;
use crate::schedule::Debouncer;
use std::time::{Duration, Instant};

/// Default quiet period before a typed query is applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub debounce: Duration,
    pub min_highlight_len: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_highlight_len: super::highlight::DEFAULT_MIN_HIGHLIGHT_LEN,
        }
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No filter applied
    Idle,
    /// A debounced pass for this raw input is pending
    Filtering(String),
    /// The last pass matched at least one post
    Matched,
    /// The last pass matched nothing
    NoResults,
}

/// Interactive search over one post collection
#[derive(Debug, Clone)]
pub struct SearchSession {
    posts: Vec<Post>,
    settings: SessionSettings,
    input: String,
    filter: ActiveFilter,
    debouncer: Debouncer<String>,
    view: PageView,
    passes: usize,
}

impl SearchSession {
    #[must_use]
    pub fn new(posts: Vec<Post>, settings: SessionSettings) -> Self {
        let view = PageView::unfiltered(&posts);
        Self {
            posts,
            settings,
            input: String::new(),
            filter: ActiveFilter::None,
            debouncer: Debouncer::new(settings.debounce),
            view,
            passes: 0,
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub const fn view(&self) -> &PageView {
        &self.view
    }

    #[must_use]
    pub const fn filter(&self) -> &ActiveFilter {
        &self.filter
    }

    /// Raw contents of the search input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of filter passes run so far
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.passes
    }

    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if let Some(pending) = self.debouncer.pending() {
            return SessionState::Filtering(pending.clone());
        }
        match (&self.filter, self.view.any_match) {
            (ActiveFilter::None, _) => SessionState::Idle,
            (_, true) => SessionState::Matched,
            (_, false) => SessionState::NoResults,
        }
    }

    /// Record new search input and schedule a debounced pass
    ///
    /// Any pending pass is replaced. An active tag is dropped immediately
    /// along with its filtering, so every post shows until the pending pass
    /// runs and only one filter is ever active.
    pub fn input_changed(&mut self, raw: &str, now: Instant) {
        self.input = raw.to_string();
        if self.filter.active_tag().is_some() {
            self.filter = ActiveFilter::None;
            self.view = PageView::unfiltered(&self.posts);
        }
        self.debouncer.push(self.input.clone(), now);
    }

    /// Run the pending pass if its quiet period is over
    ///
    /// Returns `true` if a pass ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(raw) => {
                self.apply(ActiveFilter::text(&raw));
                true
            }
            None => false,
        }
    }

    /// Apply the current input immediately (Enter or the search button)
    pub fn submit(&mut self) -> &PageView {
        self.debouncer.cancel();
        let filter = ActiveFilter::text(&self.input);
        self.apply(filter);
        &self.view
    }

    /// Filter by a single tag, replacing any text query
    pub fn select_tag(&mut self, tag: &str) -> &PageView {
        self.debouncer.cancel();
        self.input.clear();
        self.apply(ActiveFilter::tag(tag));
        &self.view
    }

    /// Drop every filter and show all posts (Escape)
    pub fn clear(&mut self) -> &PageView {
        self.debouncer.cancel();
        self.input.clear();
        self.apply(ActiveFilter::None);
        &self.view
    }

    /// When the pending pass becomes due
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Acknowledge the scroll request of a tag pass
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.view.scroll_to_results)
    }

    fn apply(&mut self, filter: ActiveFilter) {
        self.view = PageView::build(&filter, &self.posts, self.settings.min_highlight_len);
        self.filter = filter;
        self.passes += 1;
        tracing::debug!(
            pass = self.passes,
            filter = ?self.filter,
            visible = self.view.visible_count(),
            "applied filter"
        );
    }
}
