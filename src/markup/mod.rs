//! HTML escaping
//!
//! Every piece of post or user text that ends up in rendered HTML goes through
//! [`escape_html`]. There is no opt-out.

/// Escape text so it is treated as literal content inside HTML
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entities. Safe for both element
/// content and double- or single-quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append the escaped form of `text` to `out`
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("Intro to Go"), "Intro to Go");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_unicode_untouched() {
        assert_eq!(escape_html("café 🚀"), "café 🚀");
    }

    #[test]
    fn test_push_escaped_appends() {
        let mut out = String::from("<p>");
        push_escaped(&mut out, "1 < 2");
        out.push_str("</p>");
        assert_eq!(out, "<p>1 &lt; 2</p>");
    }
}
