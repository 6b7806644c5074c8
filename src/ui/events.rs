//! Event handling for the reader
//!
//! Maps keyboard events to reader actions. What a key does depends on the
//! mode: while the search input or the comment form has focus, plain
//! characters are text and only shortcuts that work while typing apply.

use super::app::App;
use super::state::Mode;
use crate::comments::Field;
use crate::keybinds::PageAction;
use crate::share::Platform;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the reader
    Quit,
    /// No action taken
    Ignored,
}

/// Wait up to `timeout` for the next terminal event
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle one terminal event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key, now),
        Event::Resize(..) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Handle one key press
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    let result = match app.state().mode {
        Mode::Help => {
            // Any key closes help
            app.state_mut().mode = Mode::Normal;
            EventResult::Continue
        }
        Mode::Search => handle_search_mode(app, key, now),
        Mode::Comment => handle_comment_mode(app, key, now),
        Mode::Share => handle_share_mode(app, key, now),
        Mode::Normal => handle_normal_mode(app, key, now),
    };

    if app.state().should_exit {
        EventResult::Quit
    } else {
        result
    }
}

/// A key that produces text rather than a shortcut
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn perform(app: &mut App, action: PageAction, now: Instant) -> EventResult {
    app.perform(action, now);
    EventResult::Continue
}

fn handle_normal_mode(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    match app.action_for(&key) {
        Some(action) => perform(app, action, now),
        None => EventResult::Ignored,
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    let action = app.action_for(&key);
    if let Some(action) = action.filter(|a| a.works_while_typing()) {
        return perform(app, action, now);
    }

    if let Some(c) = typed_char(&key) {
        app.type_char(c, now);
        return EventResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Backspace, _) => app.delete_char(now),
        (KeyCode::Left, _) => app.state_mut().query_cursor_left(),
        (KeyCode::Right, _) => app.state_mut().query_cursor_right(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => app.clear_input(now),
        _ => {
            return match action {
                Some(action) => perform(app, action, now),
                None => EventResult::Ignored,
            };
        }
    }
    EventResult::Continue
}

fn handle_comment_mode(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    if app.action_for(&key) == Some(PageAction::Quit) {
        return perform(app, PageAction::Quit, now);
    }

    if let Some(c) = typed_char(&key) {
        app.comment_char(c);
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Esc => app.state_mut().mode = Mode::Normal,
        KeyCode::Tab | KeyCode::BackTab => app.switch_comment_field(),
        KeyCode::Backspace => app.comment_backspace(),
        KeyCode::Enter => match app.state().comment_field {
            Field::Name => app.switch_comment_field(),
            Field::Comment => app.submit_comment(now),
        },
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

fn handle_share_mode(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    let platform = match typed_char(&key) {
        Some('f' | '1') => Some(Platform::Facebook),
        Some('t' | '2') => Some(Platform::Twitter),
        Some('l' | '3') => Some(Platform::LinkedIn),
        _ => None,
    };
    if let Some(platform) = platform {
        app.open_share(platform, now);
        return EventResult::Continue;
    }

    match app.action_for(&key) {
        Some(action @ (PageAction::Quit | PageAction::ClearSearch)) => perform(app, action, now),
        _ if key.code == KeyCode::Esc => perform(app, PageAction::ClearSearch, now),
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::testing::{sample_posts, sample_site};

    fn app() -> App {
        App::new(sample_site(), sample_posts(), &BlogConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_k_focuses_search_and_super_k_too() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(handle_key(&mut app, ctrl('k'), now), EventResult::Continue);
        assert_eq!(app.state().mode, Mode::Search);

        let mut app = self::app();
        let super_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        handle_key(&mut app, super_k, now);
        assert_eq!(app.state().mode, Mode::Search);
    }

    #[test]
    fn test_plain_chars_are_ignored_outside_search() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('g')), now), EventResult::Ignored);
        assert!(app.state().query.is_empty());
    }

    #[test]
    fn test_typing_then_enter_filters() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, ctrl('k'), now);
        for c in "css".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), now);
        }
        assert_eq!(app.state().query, "css");

        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.state().visible_count(), 2);
        assert_eq!(app.state().mode, Mode::Search);
    }

    #[test]
    fn test_esc_in_search_clears_and_blurs() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, ctrl('k'), now);
        handle_key(&mut app, key(KeyCode::Char('x')), now);

        handle_key(&mut app, key(KeyCode::Esc), now);

        assert_eq!(app.state().mode, Mode::Normal);
        assert!(app.state().query.is_empty());
        assert!(!app.is_filtering());
    }

    #[test]
    fn test_ctrl_u_clears_query() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, ctrl('k'), now);
        for c in "go".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), now);
        }
        handle_key(&mut app, key(KeyCode::Left), now);

        handle_key(&mut app, ctrl('u'), now);
        assert!(app.state().query.is_empty());
    }

    #[test]
    fn test_arrows_move_between_posts_while_searching() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, ctrl('k'), now);
        handle_key(&mut app, key(KeyCode::Down), now);
        assert_eq!(app.state().cursor, 1);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, key(KeyCode::F(1)), now);
        assert_eq!(app.state().mode, Mode::Help);

        handle_key(&mut app, key(KeyCode::Char('z')), now);
        assert_eq!(app.state().mode, Mode::Normal);
    }

    #[test]
    fn test_comment_mode_takes_text() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, ctrl('o'), now);
        assert_eq!(app.state().mode, Mode::Comment);

        handle_key(&mut app, key(KeyCode::Char('q')), now);
        handle_key(&mut app, key(KeyCode::Tab), now);
        assert_eq!(app.current_form().map(|f| f.name()), Some("q"));
        assert!(app.current_form().is_some_and(|f| f.error(Field::Name).is_some()));

        handle_key(&mut app, key(KeyCode::Esc), now);
        assert_eq!(app.state().mode, Mode::Normal);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let now = Instant::now();
        let mut app = app();
        handle_key(&mut app, ctrl('o'), now);
        assert_eq!(handle_key(&mut app, ctrl('c'), now), EventResult::Quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut release = ctrl('c');
        release.kind = KeyEventKind::Release;
        assert_eq!(
            handle_event(&mut app, Event::Key(release), Instant::now()),
            EventResult::Ignored
        );
        assert!(!app.state().should_exit);
    }
}
