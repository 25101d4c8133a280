//! Validation of submitted original URLs.
//!
//! The accepted shape is intentionally loose: an optional `http://` or
//! `https://` scheme, one or more dotted host labels, a 2-6 letter TLD and
//! any trailing path free of whitespace and control characters.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Compiled pattern for original URLs. Also used by request DTOs.
pub static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,6}([^\s\p{Cc}]*)$")
        .expect("URL pattern is valid")
});

/// Returns true if `url` has the accepted URL shape.
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// Validates an original URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with message `Invalid URL format` if the
/// URL does not match [`URL_PATTERN`].
pub fn validate_url(url: &str) -> Result<(), AppError> {
    if !is_valid_url(url) {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "url": url }),
        ));
    }

    Ok(())
}

/// Turns a stored original URL into an absolute redirect target.
///
/// Stored URLs may omit the scheme; those are sent to `https://`. Bytes that
/// are not allowed in a `Location` header (non-ASCII, controls, space) are
/// percent-encoded.
pub fn redirect_target(original_url: &str) -> String {
    let lower = original_url.to_ascii_lowercase();
    let absolute = if lower.starts_with("http://") || lower.starts_with("https://") {
        original_url.to_string()
    } else {
        format!("https://{original_url}")
    };

    percent_encode_unsafe(&absolute)
}

fn percent_encode_unsafe(url: &str) -> String {
    let mut out = String::with_capacity(url.len());

    for &byte in url.as_bytes() {
        if byte.is_ascii_graphic() {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_urls() {
        assert!(is_valid_url("https://example.com/a"));
        assert!(is_valid_url("http://sub.example.co.uk/path?q=1#frag"));
        assert!(is_valid_url(
            "https://www.chess.com/events/2023-fide-chess-world-cup/games"
        ));
    }

    #[test]
    fn test_accepts_missing_scheme() {
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("my-site.io/page"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!is_valid_url("localhost"));
        assert!(!is_valid_url("https://localhost:3000"));
    }

    #[test]
    fn test_rejects_bad_tld() {
        assert!(!is_valid_url("example.c"));
        assert!(!is_valid_url("example.123"));
    }

    #[test]
    fn test_rejects_whitespace_and_garbage() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("ftp://example.com"));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(!is_valid_url("https://example.com/a\u{1}b"));
        assert!(!is_valid_url("https://example.com/\u{7f}"));
        assert!(is_valid_url("https://example.com/caf\u{e9}"));
    }

    #[test]
    fn test_validate_url_error_message() {
        let err = validate_url("not-a-valid-url").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Invalid URL format");
    }

    #[test]
    fn test_redirect_target_keeps_scheme() {
        assert_eq!(redirect_target("http://example.com"), "http://example.com");
        assert_eq!(redirect_target("HTTPS://example.com"), "HTTPS://example.com");
    }

    #[test]
    fn test_redirect_target_adds_https() {
        assert_eq!(redirect_target("example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_redirect_target_percent_encodes_unsafe_bytes() {
        assert_eq!(
            redirect_target("https://example.com/caf\u{e9}"),
            "https://example.com/caf%C3%A9"
        );
        assert_eq!(
            redirect_target("example.com/a\u{1}b"),
            "https://example.com/a%01b"
        );
        assert_eq!(
            redirect_target("https://example.com/a?q=1%202"),
            "https://example.com/a?q=1%202"
        );
    }
}
