//! No-results notice
//!
//! Shown when a pass with a non-empty filter matched nothing. The notice
//! keeps the query as plain text; [`NoResultsNotice::to_html`] escapes it.

use crate::markup::escape_html;

/// Secondary line shown under the notice
pub const NOTICE_HINT: &str = "Try searching with different keywords.";

/// The single "no posts found" notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResultsNotice {
    query: String,
}

impl NoResultsNotice {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// Decide whether a pass warrants a notice
    ///
    /// Returns `None` for an empty filter label or when something matched.
    #[must_use]
    pub fn for_pass(label: Option<&str>, any_match: bool) -> Option<Self> {
        match label {
            Some(query) if !query.is_empty() && !any_match => Some(Self::new(query)),
            _ => None,
        }
    }

    /// The query exactly as the user's normalized input had it
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Plain-text message
    #[must_use]
    pub fn message(&self) -> String {
        format!("No blog posts found for \"{}\"", self.query)
    }

    /// Markup for the HTML surface, with the query escaped
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"search-result-message\" role=\"status\">\
             <p>No blog posts found for \"<strong>{}</strong>\"</p>\
             <p class=\"search-result-hint\">{NOTICE_HINT}</p></div>",
            escape_html(&self.query)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_pass_only_on_zero_matches() {
        assert_eq!(
            NoResultsNotice::for_pass(Some("rust"), false),
            Some(NoResultsNotice::new("rust"))
        );
        assert_eq!(NoResultsNotice::for_pass(Some("rust"), true), None);
    }

    #[test]
    fn test_for_pass_never_on_empty_query() {
        assert_eq!(NoResultsNotice::for_pass(None, false), None);
        assert_eq!(NoResultsNotice::for_pass(Some(""), false), None);
    }

    #[test]
    fn test_message() {
        let notice = NoResultsNotice::new("haskell");
        assert_eq!(notice.message(), "No blog posts found for \"haskell\"");
    }

    #[test]
    fn test_html_escapes_query() {
        let notice = NoResultsNotice::new("<img src=x onerror=alert(1)>");
        let html = notice.to_html();

        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
        assert!(html.contains(NOTICE_HINT));
    }
}
