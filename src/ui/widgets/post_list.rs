//! Post list widget

use super::highlighted_spans;
use crate::ui::state::{AppState, CARD_ROWS};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The visible posts as cards of [`CARD_ROWS`] lines each
///
/// Posts that have not scrolled into view yet are drawn dimmed until the
/// reveal effect marks them.
pub struct PostList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PostList<'a> {
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn card(&self, position: usize, index: usize) -> [Line<'static>; CARD_ROWS as usize] {
        let row = &self.state.rows[index];
        let is_cursor = position == self.state.cursor;
        let revealed = self.state.is_revealed(index);

        let base = match (is_cursor, revealed) {
            (true, _) => self.theme.selected_style(),
            (false, true) => self.theme.title_style(),
            (false, false) => self.theme.dimmed_style(),
        };
        let body = if revealed {
            self.theme.normal_style()
        } else {
            self.theme.dimmed_style()
        };

        let mut title = vec![
            Span::styled(if is_cursor { ">" } else { " " }, self.theme.cursor_style()),
            Span::raw(" "),
        ];
        title.extend(highlighted_spans(&row.title, base, self.theme));

        let mut excerpt = vec![Span::raw("    ")];
        excerpt.extend(highlighted_spans(&row.excerpt, body, self.theme));

        let mut tags = vec![Span::raw("    ")];
        for tag in &row.tags {
            let style = if self.state.active_tag.as_deref() == Some(tag.to_lowercase().as_str()) {
                self.theme.active_tag_style()
            } else {
                self.theme.tag_style()
            };
            tags.push(Span::styled(format!("#{tag}"), style));
            tags.push(Span::raw(" "));
        }
        if !row.category.is_empty() {
            tags.push(Span::styled(
                format!("({})", row.category),
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ));
        }

        [
            Line::from(title),
            Line::from(excerpt),
            Line::from(tags),
            Line::default(),
        ]
    }
}

impl Widget for PostList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Posts ");

        let lines: Vec<Line<'static>> = self
            .state
            .visible_rows()
            .enumerate()
            .flat_map(|(position, (index, _))| self.card(position, index))
            .collect();

        let offset = u16::try_from(self.state.scroll_offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .block(block)
            .scroll((offset, 0))
            .render(area, buf);
    }
}
