//! Short code generation and custom name handling.
//!
//! Generated codes are drawn uniformly from the 62-symbol alphanumeric
//! alphabet. Custom names are user input: runs of whitespace collapse to a
//! single `-` before the name is used as a short code.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Minimum length of a custom name supplied on update.
pub const MIN_CUSTOM_NAME_LENGTH: usize = 5;

/// First path segments owned by other routes; `/{code}` never sees them.
pub const RESERVED_NAMES: &[&str] = &["health", "api"];

/// Characters that would split or end the `/{code}` path segment.
const FORBIDDEN_CHARS: &[char] = &['/', '?', '#', '%', '\\'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Generates a random short code of [`CODE_LENGTH`] alphanumeric characters.
///
/// # Examples
///
/// ```
/// use shortit::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Replaces every run of whitespace with a single `-`.
///
/// ```
/// use shortit::utils::code_generator::format_custom_name;
///
/// assert_eq!(format_custom_name("my cool link"), "my-cool-link");
/// assert_eq!(format_custom_name("a \t\n b"), "a-b");
/// ```
pub fn format_custom_name(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "-").into_owned()
}

/// Checks the minimum length of a custom name supplied on update.
///
/// Length is counted in characters, before whitespace formatting.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the name is shorter than
/// [`MIN_CUSTOM_NAME_LENGTH`].
pub fn validate_custom_name_length(name: &str) -> Result<(), AppError> {
    let length = name.chars().count();

    if length < MIN_CUSTOM_NAME_LENGTH {
        return Err(AppError::bad_request(
            "Custom name must be at least 5 characters long",
            json!({ "provided_length": length }),
        ));
    }

    Ok(())
}

/// Checks that a formatted custom name can be served by the `/{code}` route.
///
/// The name must be a single path segment: no `/`, `?`, `#`, `%` or `\`,
/// no control characters, not `.` or `..`, and not a reserved route name
/// (compared case-insensitively).
///
/// # Errors
///
/// Returns [`AppError::Validation`] with message `Custom name is not allowed`.
pub fn validate_custom_name_route(name: &str) -> Result<(), AppError> {
    let reserved = RESERVED_NAMES
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved));
    let unroutable = name == "."
        || name == ".."
        || name.chars().any(|c| FORBIDDEN_CHARS.contains(&c) || c.is_control());

    if reserved || unroutable {
        return Err(AppError::bad_request(
            "Custom name is not allowed",
            json!({ "custom_name": name }),
        ));
    }

    Ok(())
}
