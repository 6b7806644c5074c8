//! Match highlighting
//!
//! Highlighting always starts from the original, unmarked text, so running it
//! again with the same query produces the same result. The output is a list
//! of segments rather than a markup string; each render surface decides how a
//! mark looks, and the HTML surface escapes every segment before wrapping it.

use super::query::Query;
use crate::markup::push_escaped;
use regex::RegexBuilder;

/// Queries at or below this many characters are not highlighted
pub const DEFAULT_MIN_HIGHLIGHT_LEN: usize = 2;

/// A run of text, either plain or matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Mark(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Mark(s) => s,
        }
    }

    #[must_use]
    pub const fn is_mark(&self) -> bool {
        matches!(self, Self::Mark(_))
    }
}

/// Text split into plain and marked segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    segments: Vec<Segment>,
}

impl Highlighted {
    /// Unmarked text
    #[must_use]
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::Plain(text.to_string())],
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of marked segments
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_mark()).count()
    }

    /// The original text with all marks stripped
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Escaped HTML with matches wrapped in `<mark class="search-highlight">`
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => push_escaped(&mut out, text),
                Segment::Mark(text) => {
                    out.push_str(r#"<mark class="search-highlight">"#);
                    push_escaped(&mut out, text);
                    out.push_str("</mark>");
                }
            }
        }
        out
    }
}

/// Mark every case-insensitive occurrence of `query` in `text`
///
/// Returns unmarked text when the query has `min_len` characters or fewer.
/// Regex metacharacters in the query are matched literally.
///
/// Marks use simple case folding, while matching compares fully lowercased
/// text. Characters whose lowercase form is longer than one character (such
/// as `İ`, which lowercases to `i` plus a combining dot) can therefore make a
/// post match without any mark in it.
#[must_use]
pub fn highlight(text: &str, query: &Query, min_len: usize) -> Highlighted {
    if query.char_len() <= min_len {
        return Highlighted::plain(text);
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query.as_str()))
        .case_insensitive(true)
        .build()
    else {
        // An escaped literal always compiles; fall back to plain text regardless
        return Highlighted::plain(text);
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Plain(text[last..found.start()].to_string()));
        }
        segments.push(Segment::Mark(found.as_str().to_string()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }

    Highlighted { segments }
}
