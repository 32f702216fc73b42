//! Markup escaping
//!
//! Every stored or submitted value that ends up in markup goes through here.

use std::borrow::Cow;

/// Escape a value for a double-quoted attribute (`&`, `<`, `>`, `"`)
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Escape a value for text content (`&`, `<`, `>`)
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_escapes_markup() {
        assert_eq!(
            attr(r#"<script>alert("x")</script> & more"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"
        );
    }

    #[test]
    fn test_plain_values_untouched() {
        assert_eq!(attr("http://x/img.png"), "http://x/img.png");
        assert!(matches!(attr("Hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_text_escape() {
        assert_eq!(text("a < b & c"), "a &lt; b &amp; c");
    }
}
