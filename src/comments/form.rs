//! Simulated comment submission
//!
//! A [`CommentForm`] belongs to one post. Submitting validates the fields and,
//! if they pass, starts a fixed delay standing in for a network round-trip.
//! When the delay is over the comment is prepended to the post's session
//! comment list, appears after a short reveal delay, and a success message is
//! shown for a limited time. Posting cannot fail and is never retried.

use super::validation::{Field, FieldError, ValidComment, validate, validate_field};
use crate::posts::{Comment, Post, PostId};
use crate::schedule::{Delayed, Expiring};
use chrono::Local;
use std::time::{Duration, Instant};

/// Default simulated posting delay
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// Default lifetime of the success message
pub const DEFAULT_SUCCESS_TTL: Duration = Duration::from_millis(3000);
/// A new comment stays hidden this long after it is inserted
pub const COMMENT_REVEAL_DELAY: Duration = Duration::from_millis(100);

pub const SUCCESS_MESSAGE: &str = "Comment posted successfully!";
pub const SUBMIT_LABEL: &str = "Post Comment";
pub const POSTING_LABEL: &str = "Posting...";

/// Timing of the simulated submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub submit_delay: Duration,
    pub success_ttl: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            success_ttl: DEFAULT_SUCCESS_TTL,
        }
    }
}

/// Result of pressing the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields were valid; posting has started
    Started,
    /// Fields were invalid; they are now marked
    Invalid(Vec<FieldError>),
    /// A submission is already in flight
    AlreadyPosting,
}

/// Timestamp as displayed next to a new comment, in local time
#[must_use]
pub fn timestamp_now() -> String {
    Local::now().format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Comment form and session comment list of one post
#[derive(Debug, Clone)]
pub struct CommentForm {
    post_id: PostId,
    name: String,
    text: String,
    name_error: Option<FieldError>,
    comment_error: Option<FieldError>,
    posting: Delayed<ValidComment>,
    comments: Vec<Comment>,
    success: Option<Expiring<&'static str>>,
    /// The newest comment is hidden until this expires
    appearing: Option<Expiring<()>>,
    settings: FormSettings,
    clock: fn() -> String,
}

impl CommentForm {
    /// Form for `post`, seeded with its existing comments
    #[must_use]
    pub fn new(post: &Post, settings: FormSettings) -> Self {
        Self {
            post_id: post.id.clone(),
            name: String::new(),
            text: String::new(),
            name_error: None,
            comment_error: None,
            posting: Delayed::new(settings.submit_delay),
            comments: post.comments.clone(),
            success: None,
            appearing: None,
            settings,
            clock: timestamp_now,
        }
    }

    /// Replace the timestamp source
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn post_id(&self) -> &PostId {
        &self.post_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Edit the name field; clears its error
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.name_error = None;
    }

    /// Edit the comment field; clears its error
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
        self.comment_error = None;
    }

    /// Validate a field when it loses focus
    pub fn blur(&mut self, field: Field) -> Option<&FieldError> {
        let value = match field {
            Field::Name => &self.name,
            Field::Comment => &self.text,
        };
        let error = validate_field(field, value).err();
        let slot = self.error_slot(field);
        *slot = error;
        slot.as_ref()
    }

    #[must_use]
    pub const fn error(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Name => self.name_error.as_ref(),
            Field::Comment => self.comment_error.as_ref(),
        }
    }

    /// Validate and, if valid, start the simulated post
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.posting.is_in_flight() {
            return SubmitOutcome::AlreadyPosting;
        }

        match validate(&self.name, &self.text) {
            Ok(valid) => {
                self.name_error = None;
                self.comment_error = None;
                self.posting.start(valid, now);
                tracing::debug!(post = %self.post_id, "comment submission started");
                SubmitOutcome::Started
            }
            Err(errors) => {
                for error in &errors {
                    *self.error_slot(error.field) = Some(error.clone());
                }
                tracing::warn!(post = %self.post_id, errors = errors.len(), "comment rejected");
                SubmitOutcome::Invalid(errors)
            }
        }
    }

    /// Complete a due submission
    ///
    /// Returns the appended comment when posting finished on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<&Comment> {
        if self.success.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.success = None;
        }
        if self.appearing.as_ref().is_some_and(|a| a.is_expired(now)) {
            self.appearing = None;
        }

        let valid = self.posting.poll(now)?;

        self.comments
            .insert(0, Comment::new(valid.name, valid.text, (self.clock)()));
        self.name.clear();
        self.text.clear();
        self.appearing = Some(Expiring::new((), now, COMMENT_REVEAL_DELAY));
        self.success = Some(Expiring::new(SUCCESS_MESSAGE, now, self.settings.success_ttl));
        tracing::debug!(post = %self.post_id, count = self.comments.len(), "comment posted");

        self.comments.first()
    }

    #[must_use]
    pub const fn is_posting(&self) -> bool {
        self.posting.is_in_flight()
    }

    /// Text of the submit button
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.is_posting() { POSTING_LABEL } else { SUBMIT_LABEL }
    }

    /// The button is disabled while posting
    #[must_use]
    pub const fn button_disabled(&self) -> bool {
        self.is_posting()
    }

    /// The success message, while it is still showing
    #[must_use]
    pub fn success_message(&self, now: Instant) -> Option<&'static str> {
        self.success.as_ref().and_then(|s| s.get(now)).copied()
    }

    /// Whether the comment at `index` has finished appearing
    #[must_use]
    pub fn is_revealed(&self, index: usize, now: Instant) -> bool {
        index != 0 || self.appearing.as_ref().is_none_or(|a| a.is_expired(now))
    }

    /// Comments, newest first
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Earliest moment this form has timed work due
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        crate::schedule::earliest([
            self.posting.deadline(),
            self.success.as_ref().map(Expiring::expires_at),
            self.appearing.as_ref().map(Expiring::expires_at),
        ])
    }

    fn error_slot(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Name => &mut self.name_error,
            Field::Comment => &mut self.comment_error,
        }
    }
}
