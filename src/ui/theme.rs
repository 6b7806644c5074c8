//! Color theme definitions for the reader
//!
//! Defines colors and styles used throughout the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the post under the cursor
    pub selection_bg: Color,
    /// Foreground color for the post under the cursor
    pub selection_fg: Color,
    /// Background of search matches
    pub mark_bg: Color,
    /// Foreground of search matches
    pub mark_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    /// Color for dimmed text and posts not yet revealed
    pub dimmed: Color,
    pub tag: Color,
    /// Color of the active tag
    pub active_tag: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            mark_bg: Color::Yellow,
            mark_fg: Color::Black,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            active_tag: Color::LightMagenta,
        }
    }

    /// Style for the title of the post under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for highlighted query matches
    #[must_use]
    pub fn mark_style(&self) -> Style {
        Style::default()
            .bg(self.mark_bg)
            .fg(self.mark_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the pane that has keyboard focus
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style of the active tag, like the page's `active-tag` class
    #[must_use]
    pub fn active_tag_style(&self) -> Style {
        Style::default()
            .fg(self.active_tag)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}
