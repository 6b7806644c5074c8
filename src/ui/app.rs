//! Reader controller
//!
//! [`App`] ties the search session, the per-post comment forms and the
//! terminal surface together. Every method takes the current time so the
//! whole reader can be driven from tests without a terminal.

use super::state::{AppState, MessageLevel, Mode};
use crate::comments::{CommentForm, Field, FormSettings, SubmitOutcome};
use crate::config::BlogConfig;
use crate::keybinds::help::help_rows;
use crate::keybinds::{KeybindMap, PageAction};
use crate::posts::{Comment, Post, PostId, Site};
use crate::render::sync;
use crate::schedule::earliest;
use crate::search::{SearchSession, SessionState};
use crate::share::{Platform, post_url, share_url};
use crossterm::event::KeyEvent;
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

/// The interactive reader
#[derive(Debug)]
pub struct App {
    session: SearchSession,
    state: AppState,
    site: Site,
    forms: HashMap<PostId, CommentForm>,
    form_settings: FormSettings,
    keymap: KeybindMap,
    help: Vec<(String, String)>,
}

impl App {
    #[must_use]
    pub fn new(site: Site, posts: Vec<Post>, config: &BlogConfig) -> Self {
        let tags: BTreeSet<String> = posts
            .iter()
            .flat_map(|post| post.tags.iter().map(|tag| tag.to_lowercase()))
            .collect();
        let state = AppState::new(&posts, tags.into_iter().collect());

        Self {
            session: SearchSession::new(posts, config.session_settings()),
            state,
            site,
            forms: HashMap::new(),
            form_settings: config.form_settings(),
            keymap: config.keymap(),
            help: help_rows(&config.keybinds.clone().merged_with_defaults()),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    #[must_use]
    pub const fn site(&self) -> &Site {
        &self.site
    }

    /// Rows for the help overlay
    #[must_use]
    pub fn help_rows(&self) -> &[(String, String)] {
        &self.help
    }

    /// Action bound to a key, ignoring event kind and state
    #[must_use]
    pub fn action_for(&self, key: &KeyEvent) -> Option<PageAction> {
        self.keymap
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    #[must_use]
    pub fn current_post(&self) -> Option<&Post> {
        self.session.posts().get(self.state.current_index()?)
    }

    /// Comments of a post, including those posted this session
    #[must_use]
    pub fn comments_of<'a>(&'a self, post: &'a Post) -> &'a [Comment] {
        self.forms
            .get(&post.id)
            .map_or(post.comments.as_slice(), CommentForm::comments)
    }

    /// Comment form of the current post, once it has been opened
    #[must_use]
    pub fn current_form(&self) -> Option<&CommentForm> {
        self.forms.get(self.state.current_id()?)
    }

    fn current_form_mut(&mut self) -> Option<&mut CommentForm> {
        let id = self.state.current_id()?;
        self.forms.get_mut(id)
    }

    /// Share links of the current post
    #[must_use]
    pub fn share_links(&self) -> Vec<(Platform, String)> {
        let Some(post) = self.current_post() else {
            return Vec::new();
        };
        let url = post_url(&self.site.url, post.id.as_str());
        Platform::ALL
            .iter()
            .map(|&platform| (platform, share_url(platform, &post.title, &url)))
            .collect()
    }

    /// A debounced pass is waiting
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        matches!(self.session.state(), SessionState::Filtering(_))
    }

    /// Carry out a bound action
    pub fn perform(&mut self, action: PageAction, now: Instant) {
        tracing::trace!(action = action.name(), "perform");
        match action {
            PageAction::FocusSearch => {
                self.state.menu.click_outside();
                self.state.focus_query();
            }
            PageAction::ClearSearch => self.escape(),
            PageAction::SubmitSearch => {
                if self.state.menu.is_open() {
                    self.select_menu_tag(now);
                } else if self.state.mode == Mode::Search {
                    self.session.submit();
                    self.sync_surface();
                }
            }
            PageAction::ShowHelp => self.state.mode = Mode::Help,
            PageAction::Quit => self.state.should_exit = true,
            PageAction::NextPost => {
                if self.state.menu.is_open() {
                    self.state.tag_cursor_down();
                } else {
                    self.state.cursor_down();
                }
            }
            PageAction::PrevPost => {
                if self.state.menu.is_open() {
                    self.state.tag_cursor_up();
                } else {
                    self.state.cursor_up();
                }
            }
            PageAction::SelectTag => self.cycle_post_tag(now),
            PageAction::Comment => self.open_comment_form(),
            PageAction::Share => {
                if self.current_post().is_some() {
                    self.state.mode = Mode::Share;
                }
            }
            PageAction::ToggleMenu => self.state.toggle_menu(),
            PageAction::ScrollTop => self.state.jump_to_top(),
        }
    }

    /// Escape: clear a focused search, otherwise close whatever is open
    fn escape(&mut self) {
        match self.state.mode {
            Mode::Search => {
                self.session.clear();
                self.state.clear_query();
                self.state.mode = Mode::Normal;
                self.sync_surface();
            }
            Mode::Help | Mode::Comment | Mode::Share => self.state.mode = Mode::Normal,
            Mode::Normal => self.state.menu.click_outside(),
        }
    }

    /// Type into the search input
    pub fn type_char(&mut self, c: char, now: Instant) {
        self.state.insert_char(c);
        self.session.input_changed(&self.state.query, now);
        self.sync_surface();
    }

    /// Backspace in the search input
    pub fn delete_char(&mut self, now: Instant) {
        self.state.delete_char();
        self.session.input_changed(&self.state.query, now);
        self.sync_surface();
    }

    /// Empty the search input, keeping focus
    pub fn clear_input(&mut self, now: Instant) {
        self.state.clear_query();
        self.session.input_changed("", now);
        self.sync_surface();
    }

    /// Filter by the tag under the menu cursor and close the menu
    pub fn select_menu_tag(&mut self, now: Instant) {
        let Some(tag) = self.state.menu_tag().map(str::to_string) else {
            return;
        };
        self.state.menu.nav_link_clicked();
        self.apply_tag(&tag, now);
    }

    /// Select the current post's tag after the active one
    fn cycle_post_tag(&mut self, now: Instant) {
        let Some(post) = self.current_post() else {
            return;
        };
        let tags: Vec<String> = post.tags.iter().map(|t| t.to_lowercase()).collect();
        let next = match self.state.active_tag.as_ref() {
            Some(active) => tags
                .iter()
                .position(|t| t == active)
                .map_or(0, |i| (i + 1) % tags.len()),
            None => 0,
        };
        if let Some(tag) = tags.get(next).cloned() {
            self.apply_tag(&tag, now);
        }
    }

    fn apply_tag(&mut self, tag: &str, now: Instant) {
        self.session.select_tag(tag);
        self.state.clear_query();
        if self.state.mode == Mode::Search {
            self.state.mode = Mode::Normal;
        }
        self.sync_surface();
        self.state
            .set_status(MessageLevel::Info, format!("Showing posts tagged {tag}"), now);
    }

    fn open_comment_form(&mut self) {
        let Some(post) = self
            .state
            .current_index()
            .and_then(|index| self.session.posts().get(index))
        else {
            return;
        };
        let settings = self.form_settings;
        self.forms
            .entry(post.id.clone())
            .or_insert_with(|| CommentForm::new(post, settings));
        self.state.comment_field = Field::Name;
        self.state.mode = Mode::Comment;
    }

    /// Type into the focused comment field
    pub fn comment_char(&mut self, c: char) {
        let field = self.state.comment_field;
        if let Some(form) = self.current_form_mut() {
            match field {
                Field::Name => {
                    let value = format!("{}{c}", form.name());
                    form.set_name(value);
                }
                Field::Comment => {
                    let value = format!("{}{c}", form.text());
                    form.set_text(value);
                }
            }
        }
    }

    /// Backspace in the focused comment field
    pub fn comment_backspace(&mut self) {
        let field = self.state.comment_field;
        if let Some(form) = self.current_form_mut() {
            let mut value = match field {
                Field::Name => form.name().to_string(),
                Field::Comment => form.text().to_string(),
            };
            value.pop();
            match field {
                Field::Name => form.set_name(value),
                Field::Comment => form.set_text(value),
            }
        }
    }

    /// Move focus to the other comment field, validating the one left
    pub fn switch_comment_field(&mut self) {
        let field = self.state.comment_field;
        if let Some(form) = self.current_form_mut() {
            form.blur(field);
        }
        self.state.comment_field = match field {
            Field::Name => Field::Comment,
            Field::Comment => Field::Name,
        };
    }

    /// Submit the current post's comment form
    pub fn submit_comment(&mut self, now: Instant) {
        let Some(form) = self.current_form_mut() else {
            return;
        };
        match form.submit(now) {
            SubmitOutcome::Started => {
                self.state
                    .set_status(MessageLevel::Info, "Posting comment...", now);
            }
            SubmitOutcome::Invalid(errors) => {
                if let Some(first) = errors.first() {
                    self.state.comment_field = first.field;
                    self.state.set_status(MessageLevel::Error, first.message(), now);
                }
            }
            SubmitOutcome::AlreadyPosting => {}
        }
    }

    /// Open a share link of the current post in the browser
    pub fn open_share(&mut self, platform: Platform, now: Instant) {
        let Some((_, url)) = self
            .share_links()
            .into_iter()
            .find(|(p, _)| *p == platform)
        else {
            return;
        };
        match open::that(&url) {
            Ok(()) => {
                tracing::info!(platform = platform.id(), %url, "opened share link");
                self.state.set_status(
                    MessageLevel::Success,
                    format!("Opened {} share link", platform.label()),
                    now,
                );
            }
            Err(e) => {
                tracing::warn!(platform = platform.id(), error = %e, "failed to open share link");
                self.state
                    .set_status(MessageLevel::Error, format!("Could not open browser: {e}"), now);
            }
        }
    }

    /// Run due timed work
    ///
    /// Returns `true` if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.state.expire_status(now);

        if self.session.tick(now) {
            self.sync_surface();
            changed = true;
        }

        let mut posted = Vec::new();
        for (id, form) in &mut self.forms {
            if let Some(comment) = form.tick(now) {
                tracing::info!(post = %id, author = %comment.author, "comment posted");
                posted.push(id.clone());
            }
        }
        if !posted.is_empty() {
            if self.state.mode == Mode::Comment
                && self.state.current_id().is_some_and(|id| posted.contains(id))
            {
                self.state.comment_field = Field::Name;
            }
            changed = true;
        }

        changed
    }

    /// Earliest moment timed work is due
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(
            std::iter::once(self.session.next_deadline())
                .chain(self.forms.values().map(CommentForm::next_deadline))
                .chain(std::iter::once(
                    self.state.status.as_ref().map(|s| s.expires_at()),
                )),
        )
    }

    fn sync_surface(&mut self) {
        sync(self.session.view(), &mut self.state);
        self.session.take_scroll_request();
        self.state.refresh_scroll();
    }
}
