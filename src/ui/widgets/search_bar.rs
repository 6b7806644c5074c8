//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    theme: &'a Theme,
    /// Whether the input has focus
    focused: bool,
    /// Whether the whole query is selected
    selected: bool,
    /// Whether a debounced search is waiting
    pending: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: false,
            selected: false,
            pending: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search posts... ");

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("/", self.theme.dimmed_style()), Span::raw(" ")];

        if self.selected {
            spans.push(Span::styled(
                self.query,
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        } else if self.focused {
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        } else if self.query.is_empty() {
            spans.push(Span::styled("Ctrl+K to search", self.theme.dimmed_style()));
        } else {
            spans.push(Span::raw(self.query));
        }

        if self.pending {
            spans.push(Span::styled("  …", self.theme.dimmed_style()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
