//! HTML escaping utilities

/// Escape a string for safe inclusion in HTML text or a double-quoted attribute
///
/// Escapes `&` first so existing entities are encoded exactly once per call.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(ch),
        }
    }

    result
}

/// Escape text node content when serializing an editor document
///
/// Quotes are left alone since text content never ends up inside an attribute.
pub(crate) fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(ch),
        }
    }

    result
}

/// Escape a double-quoted attribute value when serializing an editor document
pub(crate) fn escape_attribute(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(ch),
        }
    }

    result
}

/// Reverse the entities produced by [`escape_html`]
///
/// Only used to inspect already-escaped text (e.g. an href scheme); output is
/// never emitted as markup.
pub(crate) fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_escapes() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#039;s");
    }

    #[test]
    fn test_existing_entities_are_encoded_again() {
        // Escaping is not idempotent; callers must escape exactly once
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_xss_attempts() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(
            escape_html("<img src=x onerror=alert(1)>"),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
    }

    #[test]
    fn test_unescape_reverses_escape() {
        let raw = "a < b & \"c\" > 'd'";
        assert_eq!(unescape_html(&escape_html(raw)), raw);
    }

    #[test]
    fn test_text_and_attribute_escapes() {
        assert_eq!(escape_text("\"a\" < b"), "\"a\" &lt; b");
        assert_eq!(escape_attribute("x\" onclick=\"y"), "x&quot; onclick=&quot;y");
    }

    #[test]
    fn test_empty_and_large() {
        assert_eq!(escape_html(""), "");
        let large = "a".repeat(10000);
        assert_eq!(escape_html(&large).len(), 10000);
    }
}
