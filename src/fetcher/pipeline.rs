use std::sync::LazyLock;
use std::time::Duration;

use bytes::Bytes;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::fetcher::types::{Charset, PageResponse};

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

const SNIFF_WINDOW: usize = 4096;

/// Turns raw response bytes into a [`PageResponse`]. Decoding is lossy:
/// invalid sequences become U+FFFD so markup recovery can still proceed.
pub fn process_response(
    url_final: Url,
    status: StatusCode,
    content_type: Option<String>,
    body_bytes: Bytes,
    elapsed: Duration,
) -> PageResponse {
    let charset = detect_charset(content_type.as_deref(), &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, &charset);

    PageResponse {
        url_final,
        status,
        content_type,
        body_utf8,
        charset,
        elapsed,
    }
}

fn charset_from_captures(regex: &Regex, haystack: &str) -> Option<Charset> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

fn detect_charset(content_type: Option<&str>, body_bytes: &[u8]) -> Charset {
    // 1. Content-Type header
    if let Some(charset) = content_type.and_then(|ct| charset_from_captures(&CHARSET_REGEX, ct)) {
        return charset;
    }

    // 2. <meta charset> or http-equiv in the first few KB
    let search_bytes = &body_bytes[..body_bytes.len().min(SNIFF_WINDOW)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(charset) = charset_from_captures(&META_CHARSET_REGEX, &search_str) {
        return charset;
    }
    if let Some(charset) = charset_from_captures(&META_HTTP_EQUIV_REGEX, &search_str) {
        return charset;
    }

    // 3. Heuristic
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, used, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        debug!(encoding = used.name(), "replaced malformed byte sequences while decoding");
    }

    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_charset_from_content_type() {
        let body = b"<html><head><title>Test</title></head></html>";

        let charset = detect_charset(Some("text/html; charset=utf-8"), body);
        assert_eq!(charset, Charset::Utf8);
    }

    #[test]
    fn test_detect_charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Test</title></head></html>";

        // encoding_rs treats ISO-8859-1 as its superset windows-1252
        let charset = detect_charset(Some("text/html"), body);
        assert_eq!(charset, Charset::Windows1252);
    }

    #[test]
    fn test_detect_charset_from_meta_http_equiv() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"><title>Test</title></head></html>";

        let charset = detect_charset(None, body);
        assert_eq!(charset, Charset::Windows1252);
    }

    #[test]
    fn test_unknown_label_falls_through_to_heuristic() {
        let body = "plain ascii robots body".as_bytes();

        let charset = detect_charset(Some("text/plain; charset=made-up"), body);
        assert!(matches!(charset, Charset::Utf8 | Charset::Windows1252));
    }

    #[test]
    fn test_decode_utf8() {
        let body = "Hello, 世界!".as_bytes();

        assert_eq!(decode_to_utf8(body, &Charset::Utf8), "Hello, 世界!");
    }

    #[test]
    fn test_decode_is_lossy_on_malformed_input() {
        let body = b"<title>caf\xff</title>";

        let decoded = decode_to_utf8(body, &Charset::Utf8);
        assert_eq!(decoded, "<title>caf\u{FFFD}</title>");
    }

    #[test]
    fn test_decode_windows_1252() {
        let body = b"caf\xe9";

        assert_eq!(decode_to_utf8(body, &Charset::Windows1252), "café");
    }

    #[test]
    fn test_process_response_keeps_metadata() {
        let url = Url::parse("https://example.com/robots.txt").unwrap();
        let response = process_response(
            url.clone(),
            StatusCode::OK,
            Some("text/plain; charset=utf-8".to_string()),
            Bytes::from_static(b"User-agent: *\nDisallow:"),
            Duration::from_millis(12),
        );

        assert_eq!(response.url_final, url);
        assert_eq!(response.charset, Charset::Utf8);
        assert!(response.body_utf8.starts_with("User-agent"));
    }
}
