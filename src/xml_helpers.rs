//! Shared XML helpers for reading the XLSX package and writing SVG markup.
//!
//! The readers handle namespace-prefixed attributes and UTF-8 conversion
//! safely; the writer side only needs escaping.

use std::borrow::Cow;

use quick_xml::events::BytesStart;

/// Extract a string attribute value by key.
///
/// Returns `None` if the attribute is missing or not valid UTF-8.
pub fn attr_string(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return std::str::from_utf8(&attr.value).ok().map(|s| s.to_string());
        }
    }
    None
}

/// Extract a string attribute by local name (ignoring namespace prefix).
pub fn attr_string_local(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == key {
            return std::str::from_utf8(&attr.value).ok().map(|s| s.to_string());
        }
    }
    None
}

/// Extract an attribute value by key with XML entities resolved.
pub fn attr_unescaped(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return attr.unescape_value().ok().map(Cow::into_owned);
        }
    }
    None
}

/// Extract an `i64` attribute value by key.
pub fn attr_i64(e: &BytesStart, key: &[u8]) -> Option<i64> {
    attr_string(e, key).and_then(|s| s.parse().ok())
}

/// Extract a `usize` attribute value by key.
pub fn attr_usize(e: &BytesStart, key: &[u8]) -> Option<usize> {
    attr_string(e, key).and_then(|s| s.parse().ok())
}

/// Escape the five reserved markup characters (`& < > " '`).
///
/// Safe for both text nodes and double-quoted attribute values.
#[inline]
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn make_start(xml: &str) -> BytesStart<'_> {
        // Strip < and > / /> to get just the tag content
        let content = xml
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim_end_matches('/')
            .trim_end();
        BytesStart::from_content(content, content.find(' ').unwrap_or(content.len()))
    }

    #[test]
    fn test_attr_string() {
        let e = make_start(r#"<sheet name="Events" />"#);
        assert_eq!(attr_string(&e, b"name"), Some("Events".to_string()));
        assert_eq!(attr_string(&e, b"missing"), None);
    }

    #[test]
    fn test_attr_string_local_ignores_prefix() {
        let e = make_start(r#"<sheet name="Events" r:id="rId3" />"#);
        assert_eq!(attr_string_local(&e, b"id"), Some("rId3".to_string()));
        assert_eq!(attr_string(&e, b"id"), None);
    }

    #[test]
    fn test_attr_i64_and_usize() {
        let e = make_start(r#"<g data-start-year="-586" data-lane="3" />"#);
        assert_eq!(attr_i64(&e, b"data-start-year"), Some(-586));
        assert_eq!(attr_usize(&e, b"data-lane"), Some(3));
        assert_eq!(attr_usize(&e, b"data-start-year"), None);
    }

    #[test]
    fn test_attr_unescaped() {
        let e = make_start(r#"<g data-title="Fish &amp; Chips" />"#);
        assert_eq!(
            attr_unescaped(&e, b"data-title"),
            Some("Fish & Chips".to_string())
        );
        assert_eq!(
            attr_string(&e, b"data-title"),
            Some("Fish &amp; Chips".to_string())
        );
    }

    #[test]
    fn test_escape_xml_reserved_characters() {
        assert_eq!(
            escape_xml(r#"a & b < c > d "e" 'f'"#),
            "a &amp; b &lt; c &gt; d &quot;e&quot; &apos;f&apos;"
        );
    }

    #[test]
    fn test_escape_xml_plain_text_is_borrowed() {
        assert!(matches!(escape_xml("Exodus"), Cow::Borrowed("Exodus")));
    }
}
