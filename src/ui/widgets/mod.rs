//! Ratatui widgets for the reader
//!
//! Custom widgets for rendering the reader interface.

mod detail;
mod help_bar;
mod help_overlay;
mod post_list;
mod search_bar;
mod status_bar;
mod tag_menu;

pub use detail::{CommentPanel, PostDetail, SharePanel};
pub use help_bar::{HelpBar, hints_for};
pub use help_overlay::HelpOverlay;
pub use post_list::PostList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tag_menu::TagMenu;

use super::theme::Theme;
use crate::search::{Highlighted, Segment};
use ratatui::style::Style;
use ratatui::text::Span;

/// Spans for highlighted text, marks drawn with the theme's mark style
pub(crate) fn highlighted_spans(text: &Highlighted, base: Style, theme: &Theme) -> Vec<Span<'static>> {
    text.segments()
        .iter()
        .map(|segment| match segment {
            Segment::Plain(s) => Span::styled(s.clone(), base),
            Segment::Mark(s) => Span::styled(s.clone(), theme.mark_style()),
        })
        .collect()
}
