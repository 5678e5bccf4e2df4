// Locating and unescaping the chapter HTML embedded in a page.
//
// bible.com ships each chapter as a JSON string field (`"content":"..."`)
// inside the page's hydration data. The HTML in it is JSON-escaped, with
// angle brackets written as `\u003c` / `\u003e`.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AcquireError, Result};

const FIELD_PREFIX: &str = r#""content":""#;

fn content_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""content":".*?\\u003e""#).expect("valid regex"))
}

/// Find the escaped chapter HTML in a raw page, starting at byte `offset`.
///
/// Returns the string body between the opening quote and the first quote
/// that directly follows an escaped `>`. Offsets past the end of the page, or
/// a page without the field after the offset, give `NotFound`.
pub fn locate_fragment(page: &str, offset: usize) -> Result<&str> {
    let start = char_boundary_at_or_after(page, offset);
    if start >= page.len() {
        return Err(AcquireError::NotFound { offset });
    }

    let found = content_pattern()
        .find_at(page, start)
        .ok_or(AcquireError::NotFound { offset })?;

    let matched = found.as_str();
    Ok(&matched[FIELD_PREFIX.len()..matched.len() - 1])
}

/// Resolve JSON string escapes (`\n`, `\"`, `\uXXXX`, surrogate pairs...)
/// into literal text.
pub fn unescape_markup(escaped: &str) -> Result<String> {
    let quoted = format!("\"{escaped}\"");
    serde_json::from_str::<String>(&quoted).map_err(AcquireError::Decode)
}

/// Locate and unescape in one step.
pub fn extract_fragment(page: &str, offset: usize) -> Result<String> {
    unescape_markup(locate_fragment(page, offset)?)
}

fn char_boundary_at_or_after(text: &str, offset: usize) -> usize {
    let mut index = offset.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<script>{"props":{"chapterInfo":{"content":"\u003cdiv class=\"chapter\"\u003e\u003cspan class=\"verse v1\"\u003e\u003cspan class=\"content\"\u003eIn the beginning\u003c/span\u003e\u003c/span\u003e\u003c/div\u003e","reference":"GEN.1"}}}</script>"#;

    #[test]
    fn test_locate_fragment() {
        let escaped = locate_fragment(PAGE, 0).unwrap();
        assert!(escaped.starts_with(r#"\u003cdiv class=\"chapter\""#));
        assert!(escaped.ends_with(r#"\u003c/div\u003e"#));
    }

    #[test]
    fn test_extract_fragment_unescapes_html() {
        let html = extract_fragment(PAGE, 0).unwrap();
        assert_eq!(
            html,
            r#"<div class="chapter"><span class="verse v1"><span class="content">In the beginning</span></span></div>"#
        );
    }

    #[test]
    fn test_field_before_offset_is_not_found() {
        let padded = format!("{PAGE}{}", " ".repeat(64));
        let err = locate_fragment(&padded, 40).unwrap_err();
        assert!(matches!(err, AcquireError::NotFound { offset: 40 }));
    }

    #[test]
    fn test_offset_past_end_is_not_found() {
        let err = locate_fragment(PAGE, PAGE.len() + 10).unwrap_err();
        assert!(matches!(err, AcquireError::NotFound { .. }));
    }

    #[test]
    fn test_offset_inside_multibyte_char() {
        // 'é' is two bytes; offset 1 lands in its middle.
        let page = format!("é{PAGE}");
        assert!(locate_fragment(&page, 1).is_ok());
    }

    #[test]
    fn test_missing_field_is_not_found() {
        let err = locate_fragment("<html><body>404</body></html>", 0).unwrap_err();
        assert!(matches!(err, AcquireError::NotFound { .. }));
    }

    #[test]
    fn test_unescape_unicode_and_controls() {
        assert_eq!(unescape_markup(r"caf\u00e9\nline").unwrap(), "café\nline");
        assert_eq!(unescape_markup(r"\ud83d\ude00").unwrap(), "\u{1F600}");
        assert_eq!(unescape_markup(r#"say \"hi\""#).unwrap(), r#"say "hi""#);
    }

    #[test]
    fn test_unescape_keeps_raw_utf8() {
        assert_eq!(unescape_markup("Génesis").unwrap(), "Génesis");
    }

    #[test]
    fn test_malformed_escape_is_decode_error() {
        let err = unescape_markup(r"bad \q escape").unwrap_err();
        assert!(matches!(err, AcquireError::Decode(_)));

        let err = unescape_markup(r"\u12").unwrap_err();
        assert!(matches!(err, AcquireError::Decode(_)));
    }
}
