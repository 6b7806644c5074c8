//! Detail pane widgets: the current post, its comment form, its share links

use crate::comments::{CommentForm, Field};
use crate::posts::{Comment, Post};
use crate::share::Platform;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use std::time::Instant;

/// Comment list lines; `appearing` dims the newest comment
fn comment_lines(comments: &[Comment], theme: &Theme, appearing: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        format!("Comments ({})", comments.len()),
        theme.title_style().add_modifier(Modifier::UNDERLINED),
    )];
    for (index, comment) in comments.iter().enumerate() {
        lines.push(Line::default());
        if appearing && index == 0 {
            lines.push(Line::styled(comment.author.clone(), theme.dimmed_style()));
            lines.push(Line::styled(comment.text.clone(), theme.dimmed_style()));
            continue;
        }
        let mut header = vec![Span::styled(comment.author.clone(), theme.title_style())];
        if !comment.posted_at.is_empty() {
            header.push(Span::raw(" "));
            header.push(Span::styled(comment.posted_at.clone(), theme.dimmed_style()));
        }
        lines.push(Line::from(header));
        lines.push(Line::raw(comment.text.clone()));
    }
    lines
}

/// The post under the cursor with its comments
pub struct PostDetail<'a> {
    post: &'a Post,
    comments: &'a [Comment],
    theme: &'a Theme,
}

impl<'a> PostDetail<'a> {
    #[must_use]
    pub const fn new(post: &'a Post, comments: &'a [Comment], theme: &'a Theme) -> Self {
        Self {
            post,
            comments,
            theme,
        }
    }
}

impl Widget for PostDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Post ");

        let mut lines = vec![Line::styled(self.post.title.clone(), self.theme.title_style())];

        let mut byline = Vec::new();
        if !self.post.author.is_empty() {
            byline.push(format!("By {}", self.post.author));
        }
        if !self.post.date.is_empty() {
            byline.push(self.post.date.clone());
        }
        if !self.post.category.is_empty() {
            byline.push(self.post.category.clone());
        }
        if !byline.is_empty() {
            lines.push(Line::styled(byline.join(" · "), self.theme.dimmed_style()));
        }

        lines.push(Line::default());
        lines.push(Line::raw(self.post.excerpt.clone()));
        lines.push(Line::default());
        lines.extend(comment_lines(self.comments, self.theme, false));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Comment form of the current post
pub struct CommentPanel<'a> {
    form: &'a CommentForm,
    focus: Field,
    theme: &'a Theme,
    now: Instant,
}

impl<'a> CommentPanel<'a> {
    #[must_use]
    pub const fn new(form: &'a CommentForm, focus: Field, theme: &'a Theme, now: Instant) -> Self {
        Self {
            form,
            focus,
            theme,
            now,
        }
    }

    fn field_lines(&self, field: Field, value: &str) -> Vec<Line<'static>> {
        let focused = field == self.focus && !self.form.is_posting();
        let label_style = if focused {
            self.theme.cursor_style()
        } else {
            self.theme.dimmed_style()
        };
        let mut input = vec![Span::raw(format!("  {value}"))];
        if focused {
            input.push(Span::styled("│", self.theme.cursor_style()));
        }

        let mut lines = vec![Line::styled(format!("{}:", field.label()), label_style), Line::from(input)];
        if let Some(error) = self.form.error(field) {
            lines.push(Line::styled(format!("  {}", error.message()), self.theme.error_style()));
        }
        lines
    }
}

impl Widget for CommentPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Leave a comment ");

        let mut lines = self.field_lines(Field::Name, self.form.name());
        lines.push(Line::default());
        lines.extend(self.field_lines(Field::Comment, self.form.text()));
        lines.push(Line::default());

        let button_style = if self.form.button_disabled() {
            self.theme.dimmed_style()
        } else {
            self.theme.selected_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[ {} ]", self.form.button_label()), button_style),
            Span::styled("  Tab: next field  Enter: submit  Esc: close", self.theme.dimmed_style()),
        ]));

        if let Some(message) = self.form.success_message(self.now) {
            lines.push(Line::default());
            lines.push(Line::styled(message, self.theme.success_style()));
        }

        lines.push(Line::default());
        lines.extend(comment_lines(
            self.form.comments(),
            self.theme,
            !self.form.is_revealed(0, self.now),
        ));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Share links of the current post
pub struct SharePanel<'a> {
    links: &'a [(Platform, String)],
    theme: &'a Theme,
}

impl<'a> SharePanel<'a> {
    #[must_use]
    pub const fn new(links: &'a [(Platform, String)], theme: &'a Theme) -> Self {
        Self { links, theme }
    }

    const fn key(platform: Platform) -> char {
        match platform {
            Platform::Facebook => 'f',
            Platform::Twitter => 't',
            Platform::LinkedIn => 'l',
        }
    }
}

impl Widget for SharePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Share ");

        let mut lines = Vec::new();
        for (platform, url) in self.links {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", Self::key(*platform)), self.theme.cursor_style()),
                Span::styled(platform.label(), self.theme.title_style()),
            ]));
            lines.push(Line::styled(format!("    {url}"), self.theme.dimmed_style()));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press a key to open the link, Esc to close",
            self.theme.dimmed_style(),
        ));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::FormSettings;
    use crate::testing::intro_go;
    use ratatui::style::Style;
    use std::time::Duration;

    #[test]
    fn test_appearing_comment_is_dimmed() {
        let theme = Theme::default();
        let comments = vec![
            Comment::new("Ada", "Fresh off the press", "now"),
            Comment::new("Bob", "An older comment", "yesterday"),
        ];

        let lines = comment_lines(&comments, &theme, true);
        assert_eq!(lines[2].style, theme.dimmed_style());
        assert_eq!(lines[3].style, theme.dimmed_style());
        assert_eq!(lines[6].style, Style::default());

        let lines = comment_lines(&comments, &theme, false);
        assert_eq!(lines[2].style, Style::default());
    }

    #[test]
    fn test_comment_panel_renders_new_comment() {
        let start = Instant::now();
        let theme = Theme::default();
        let mut form = CommentForm::new(&intro_go(), FormSettings::default());
        form.set_name("Ada");
        form.set_text("A perfectly valid comment");
        form.submit(start);
        form.tick(start + Duration::from_secs(1));

        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        CommentPanel::new(&form, Field::Name, &theme, start + Duration::from_secs(1))
            .render(area, &mut buf);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("Comment posted successfully!"));
        assert!(text.contains("A perfectly valid comment"));
    }
}
