//! HTML escaping in the exact form the sanitizer's serializer produces.
//!
//! The renderer writes markup that must survive a parse/serialize round trip
//! byte for byte, so every helper here mirrors what the HTML5 parser does to its
//! input (newline folding, NUL removal) and what the serializer writes back out.

use std::borrow::Cow;

/// Folds `\r\n` and lone `\r` into `\n` and drops NUL, as the HTML input stream does.
pub fn normalize_input(value: &str) -> Cow<'_, str> {
    if !value.contains(['\r', '\0']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\0' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Escapes a value for use as element text content.
pub fn escape_text(value: &str) -> String {
    let value = normalize_input(value);
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a value for use inside a double-quoted attribute.
///
/// Callers must not pass `<` or `>`; URLs go through [`encode_url`] first.
pub fn escape_attr(value: &str) -> String {
    let value = normalize_input(value);
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encodes the characters that are never valid in a URL and would
/// otherwise need attribute escaping.
pub fn encode_url(value: &str) -> String {
    let value = normalize_input(value);
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '"' => out.push_str("%22"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a value that may land in text or in an attribute (template tokens).
pub fn escape_any(value: &str) -> String {
    escape_attr(value).replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escaping_leaves_quotes_alone() {
        assert_eq!(escape_text(r#"O'Brien & "Sons" <Ltd>"#), r#"O'Brien &amp; "Sons" &lt;Ltd&gt;"#);
    }

    #[test]
    fn attr_escaping_quotes_but_not_apostrophes() {
        assert_eq!(escape_attr(r#"a"b'c&d"#), "a&quot;b'c&amp;d");
    }

    #[test]
    fn carriage_returns_fold_to_newlines() {
        assert_eq!(normalize_input("a\r\nb\rc\0d"), "a\nb\ncd");
        assert!(matches!(normalize_input("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn url_encoding_removes_markup_characters() {
        assert_eq!(encode_url(r#"https://x.test/<a>"q""#), "https://x.test/%3Ca%3E%22q%22");
    }

    #[test]
    fn escape_any_is_safe_in_both_contexts() {
        assert_eq!(escape_any(r#"<"&">"#), "&lt;&quot;&amp;&quot;&gt;");
    }
}
