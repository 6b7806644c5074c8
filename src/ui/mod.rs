//! Interactive terminal reader
//!
//! A ratatui front end over the same search session and comment forms the
//! library exposes. The event loop polls crossterm with a timeout bounded by
//! the nearest pending deadline (debounced search, comment posting, message
//! expiry), so timed work runs without a background thread.

pub mod app;
pub mod error;
pub mod events;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use error::{Result, UiError};
pub use events::EventResult;
pub use state::{AppState, MessageLevel, Mode, StatusMessage};
pub use theme::Theme;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};
use widgets::{
    CommentPanel, HelpBar, HelpOverlay, PostDetail, PostList, SearchBar, SharePanel,
    StatusBar, TagMenu,
};

/// Longest wait for input when nothing is scheduled
pub const MAX_POLL: Duration = Duration::from_millis(250);

/// Run the reader until the user quits
///
/// # Errors
///
/// Returns `UiError::NotATerminal` outside an interactive terminal, or an IO
/// error if the terminal cannot be driven.
pub fn run(app: &mut App) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(UiError::NotATerminal);
    }
    if app.state().rows.is_empty() {
        return Err(UiError::NoPosts);
    }

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, app);
    cleanup_terminal()?;
    terminal.show_cursor()?;
    result
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let theme = Theme::default();

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| draw(frame, app, &theme, now))?;

        let timeout = poll_timeout(app.next_deadline(), Instant::now());
        if let Some(event) = events::poll_event(timeout)?
            && events::handle_event(app, event, Instant::now()) == EventResult::Quit
        {
            break;
        }
    }

    tracing::debug!(passes = app.session().passes(), "reader closed");
    Ok(())
}

/// How long to wait for input before timed work is due
#[must_use]
pub fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline.map_or(MAX_POLL, |d| d.saturating_duration_since(now).min(MAX_POLL))
}

/// Render one frame
pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme, now: Instant) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Posts + detail
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let pending = app.is_filtering();
    let state = app.state();
    let search_bar = SearchBar::new(&state.query, state.query_cursor, theme)
        .focused(state.mode == Mode::Search)
        .selected(state.query_selected)
        .pending(pending);
    frame.render_widget(search_bar, main_layout[0]);

    draw_content(frame, app, theme, main_layout[1], now);

    let state = app.state();
    let status_bar = StatusBar::new(state.status(now), theme, state.visible_count(), state.rows.len())
        .active_link(state.nav.active())
        .active_tag(state.active_tag.as_deref())
        .scroll_top(state.show_scroll_top());
    frame.render_widget(status_bar, main_layout[2]);

    let help_bar = HelpBar::new(state.mode, theme).menu_open(state.menu.is_open());
    frame.render_widget(help_bar, main_layout[3]);

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme, app.help_rows()), area);
    }
}

fn draw_content(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect, now: Instant) {
    let menu_open = app.state().menu.is_open();
    let constraints = if menu_open {
        vec![
            Constraint::Length(20),
            Constraint::Percentage(50),
            Constraint::Min(20),
        ]
    } else {
        vec![Constraint::Percentage(55), Constraint::Percentage(45)]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    let (list_area, detail_area) = if menu_open {
        let state = app.state();
        let menu = TagMenu::new(&state.tags, state.tag_cursor, theme).active(state.active_tag.as_deref());
        frame.render_widget(menu, chunks[0]);
        (chunks[1], chunks[2])
    } else {
        (chunks[0], chunks[1])
    };

    let list_area = match app.state().notice.clone() {
        Some(notice) => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(3)])
                .split(list_area);
            let lines = vec![
                Line::styled(notice, theme.warning_style()),
                Line::styled(crate::search::notice::NOTICE_HINT, theme.dimmed_style()),
            ];
            frame.render_widget(Paragraph::new(lines), split[0]);
            split[1]
        }
        None => list_area,
    };

    // Borders take two rows
    app.state_mut()
        .set_list_height(u32::from(list_area.height.saturating_sub(2)));

    let state = app.state();
    let list = PostList::new(state, theme).focused(!menu_open && state.mode == Mode::Normal);
    frame.render_widget(list, list_area);

    let Some(post) = app.current_post() else {
        return;
    };
    match state.mode {
        Mode::Comment => {
            if let Some(form) = app.current_form() {
                let panel = CommentPanel::new(form, state.comment_field, theme, now);
                frame.render_widget(panel, detail_area);
            }
        }
        Mode::Share => {
            let links = app.share_links();
            frame.render_widget(SharePanel::new(&links, theme), detail_area);
        }
        _ => {
            let detail = PostDetail::new(post, app.comments_of(post), theme);
            frame.render_widget(detail, detail_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::testing::{sample_posts, sample_site};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_poll_timeout_is_bounded_by_deadline() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), MAX_POLL);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(40)), now),
            Duration::from_millis(40)
        );
        assert_eq!(poll_timeout(Some(now + Duration::from_secs(3)), now), MAX_POLL);
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(5)), Duration::ZERO);
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::default();
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, app, &theme, now)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_lists_posts_and_detail() {
        let mut app = App::new(sample_site(), sample_posts(), &BlogConfig::default());
        let screen = screen(&mut app);

        assert!(screen.contains("Intro to Go"));
        assert!(screen.contains("CSS Tricks"));
        assert!(screen.contains("Comments (1)"));
        assert!(screen.contains("3 of 3 posts"));
    }

    #[test]
    fn test_draw_shows_notice() {
        let now = Instant::now();
        let mut app = App::new(sample_site(), sample_posts(), &BlogConfig::default());
        app.perform(crate::keybinds::PageAction::FocusSearch, now);
        for c in "zzz".chars() {
            app.type_char(c, now);
        }
        app.perform(crate::keybinds::PageAction::SubmitSearch, now);

        let screen = screen(&mut app);
        assert!(screen.contains("No blog posts found for \"zzz\""));
        assert!(!screen.contains("Intro to Go"));
    }
}
