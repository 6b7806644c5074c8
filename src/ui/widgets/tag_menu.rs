//! Tag menu widget

use crate::page::MenuIcon;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Collapsible list of every tag on the page
pub struct TagMenu<'a> {
    tags: &'a [String],
    cursor: usize,
    active: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TagMenu<'a> {
    #[must_use]
    pub const fn new(tags: &'a [String], cursor: usize, theme: &'a Theme) -> Self {
        Self {
            tags,
            cursor,
            active: None,
            theme,
        }
    }

    #[must_use]
    pub const fn active(mut self, tag: Option<&'a str>) -> Self {
        self.active = tag;
        self
    }

    /// Glyph for the menu button in the given state
    #[must_use]
    pub const fn icon(icon: MenuIcon) -> &'static str {
        match icon {
            MenuIcon::Bars => "☰",
            MenuIcon::Times => "✕",
        }
    }
}

impl Widget for TagMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(format!(" {} Tags ", Self::icon(MenuIcon::Times)));

        let lines: Vec<Line> = self
            .tags
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let style = if self.active == Some(tag.as_str()) {
                    self.theme.active_tag_style()
                } else if i == self.cursor {
                    self.theme.selected_style()
                } else {
                    self.theme.tag_style()
                };
                let marker = if i == self.cursor { ">" } else { " " };
                Line::from(vec![
                    Span::styled(marker, self.theme.cursor_style()),
                    Span::raw(" "),
                    Span::styled(tag.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
