//! Bottom line of key hints for the current reader mode

use crate::ui::state::Mode;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// (key, action) pairs
type Hints = &'static [(&'static str, &'static str)];

const NORMAL_HINTS: Hints = &[
    ("↑/↓", "move"),
    ("Ctrl+K", "search"),
    ("Ctrl+T", "tag"),
    ("Ctrl+G", "tags"),
    ("Ctrl+O", "comment"),
    ("Ctrl+S", "share"),
    ("F1", "help"),
    ("Ctrl+C", "quit"),
];
const MENU_HINTS: Hints = &[
    ("↑/↓", "pick tag"),
    ("Enter", "filter"),
    ("Ctrl+G/Esc", "close menu"),
];
const SEARCH_HINTS: Hints = &[
    ("Type", "filter"),
    ("Enter", "search now"),
    ("Esc", "clear"),
    ("↑/↓", "move"),
];
const COMMENT_HINTS: Hints = &[("Tab", "next field"), ("Enter", "submit"), ("Esc", "close")];
const SHARE_HINTS: Hints = &[("f/t/l", "open"), ("Esc", "close")];
const HELP_HINTS: Hints = &[("Any key", "close")];

/// Hints shown for a mode; an open tag menu takes over normal mode
#[must_use]
pub const fn hints_for(mode: Mode, menu_open: bool) -> Hints {
    match mode {
        Mode::Normal if menu_open => MENU_HINTS,
        Mode::Normal => NORMAL_HINTS,
        Mode::Search => SEARCH_HINTS,
        Mode::Comment => COMMENT_HINTS,
        Mode::Share => SHARE_HINTS,
        Mode::Help => HELP_HINTS,
    }
}

/// Key hints for the reader's current mode
pub struct HelpBar<'a> {
    mode: Mode,
    menu_open: bool,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(mode: Mode, theme: &'a Theme) -> Self {
        Self {
            mode,
            menu_open: false,
            theme,
        }
    }

    #[must_use]
    pub const fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    /// Hint spans that fit in `width`; hints that would be cut are dropped whole
    fn spans(&self, width: usize) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let mut used = 0;

        for (i, (key, action)) in hints_for(self.mode, self.menu_open).iter().enumerate() {
            let gap = if i > 0 { 2 } else { 0 };
            let hint = [
                Span::styled(*key, self.theme.cursor_style()),
                Span::styled(":", self.theme.dimmed_style()),
                Span::raw(*action),
            ];
            let needed = gap + hint.iter().map(Span::width).sum::<usize>();
            if used + needed > width {
                break;
            }
            if gap > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.extend(hint);
            used += needed;
        }
        spans
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = self.spans(usize::from(area.width));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_menu_hints_replace_normal_hints() {
        assert_eq!(hints_for(Mode::Normal, false)[1], ("Ctrl+K", "search"));
        assert_eq!(hints_for(Mode::Normal, true)[0], ("↑/↓", "pick tag"));
        assert_eq!(hints_for(Mode::Search, true), SEARCH_HINTS);
    }

    #[test]
    fn test_hints_that_do_not_fit_are_dropped_whole() {
        let theme = Theme::default();
        let bar = HelpBar::new(Mode::Comment, &theme);

        assert_eq!(text(&bar.spans(80)), "Tab:next field  Enter:submit  Esc:close");
        assert_eq!(text(&bar.spans(30)), "Tab:next field  Enter:submit");
        assert!(bar.spans(3).is_empty());
    }
}
