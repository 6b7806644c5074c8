//! Help overlay widget for displaying the full keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Centered help screen listing every enabled shortcut
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    /// `(keys, description)` rows; header rows have an empty description
    rows: &'a [(String, String)],
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, rows: &'a [(String, String)]) -> Self {
        Self { theme, rows }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (keys, description) in self.rows {
            if description.is_empty() {
                lines.push(Line::default());
                lines.push(Line::styled(
                    format!("  {keys}"),
                    self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
                ));
                lines.push(Line::default());
            } else {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<18}"), self.theme.info_style()),
                    Span::raw(description.clone()),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
