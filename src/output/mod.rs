//! Output formatting for CLI display
//!
//! This module formats posts, comments and summaries for the terminal,
//! including highlight segments rendered as colored spans.

use crate::posts::{Comment, Post};
use crate::search::{Highlighted, PostView, Segment};
use colored::Colorize;

/// Render highlight segments with matches black-on-yellow
#[must_use]
pub fn colorize_segments(text: &Highlighted) -> String {
    text.segments()
        .iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.bold().to_string(),
            Segment::Mark(s) => s.black().on_yellow().bold().to_string(),
        })
        .collect()
}

/// Format one visible post for a listing
///
/// Quiet mode prints just the post id, for scripting.
#[must_use]
pub fn post_line(post: &Post, view: &PostView, quiet: bool) -> String {
    if quiet {
        return post.id.to_string();
    }

    let mut line = format!("  {}", colorize_segments(&view.title));
    if !post.tags.is_empty() {
        line.push_str(&format!(" [{}]", post.tags.join(", ").magenta()));
    }
    if !post.category.is_empty() {
        line.push_str(&format!(" {}", format!("({})", post.category).dimmed()));
    }
    line
}

/// Format a post's excerpt, indented under its title line
#[must_use]
pub fn excerpt_line(view: &PostView) -> Option<String> {
    if view.excerpt.segments().is_empty() {
        return None;
    }
    let excerpt: String = view
        .excerpt
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.clone(),
            Segment::Mark(s) => s.black().on_yellow().to_string(),
        })
        .collect();
    Some(format!("    {excerpt}"))
}

/// Format a comment
#[must_use]
pub fn comment_block(comment: &Comment) -> String {
    let mut header = comment.author.bold().to_string();
    if !comment.posted_at.is_empty() {
        header.push_str(&format!(" {}", comment.posted_at.dimmed()));
    }
    format!("  {header}\n    {}", comment.text)
}

/// Summary line after a listing
#[must_use]
pub fn match_summary(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "post" } else { "posts" };
    format!("{visible} of {total} {noun} shown").dimmed().to_string()
}

/// Tag with the number of posts carrying it
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count} post(s))")
    }
}
