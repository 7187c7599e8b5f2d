//! Character encoding detection and transcoding of fetched bodies.
//!
//! A body's charset is taken from, in order: a byte-order mark, the
//! `Content-Type` response header, a `<meta>` declaration in the first
//! kilobyte, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or the charset inside a `http-equiv` content value.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Only the head of a document is searched for a `<meta>` charset.
const META_SCAN_LEN: usize = 1024;

/// Detect the encoding of a fetched body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    if let Some(encoding) = content_type
        .and_then(|ct| capture(&HEADER_CHARSET_RE, ct))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SCAN_LEN)]);
    capture(&META_CHARSET_RE, &head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode a fetched body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use rs_readable::encoding::decode_body;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// assert!(decode_body(body, Some("text/html; charset=ISO-8859-1")).contains("Café"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
