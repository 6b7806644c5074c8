//! Status bar widget for messages and page position

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget
///
/// The left side shows the latest message, or how many posts are showing.
/// The right side shows the active navigation link, the active tag and the
/// scroll-to-top hint.
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
    visible: usize,
    total: usize,
    active_link: &'a str,
    active_tag: Option<&'a str>,
    scroll_top: bool,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        theme: &'a Theme,
        visible: usize,
        total: usize,
    ) -> Self {
        Self {
            message,
            theme,
            visible,
            total,
            active_link: "",
            active_tag: None,
            scroll_top: false,
        }
    }

    #[must_use]
    pub const fn active_link(mut self, link: &'a str) -> Self {
        self.active_link = link;
        self
    }

    #[must_use]
    pub const fn active_tag(mut self, tag: Option<&'a str>) -> Self {
        self.active_tag = tag;
        self
    }

    #[must_use]
    pub const fn scroll_top(mut self, visible: bool) -> Self {
        self.scroll_top = visible;
        self
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let left = match self.message {
            Some(msg) => {
                let style = self.style_for_level(msg.level);
                Line::from(vec![
                    Span::styled(Self::prefix_for_level(msg.level), style),
                    Span::styled(msg.text.as_str(), style),
                ])
            }
            None => Line::styled(
                format!("{} of {} posts", self.visible, self.total),
                self.theme.dimmed_style(),
            ),
        };
        Paragraph::new(left).render(chunks[0], buf);

        let mut right = vec![Span::styled(self.active_link, self.theme.info_style())];
        if let Some(tag) = self.active_tag {
            right.push(Span::raw("  "));
            right.push(Span::styled(format!(" {tag} "), self.theme.active_tag_style()));
        }
        if self.scroll_top {
            right.push(Span::styled("  ↑ Home", self.theme.cursor_style()));
        }
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
