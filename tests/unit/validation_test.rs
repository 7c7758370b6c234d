//! Unit tests for the form validation service.
//!
//! Checks the per-field rules, their short-circuit order, and the exact
//! message strings that surface verbatim in the UI.

use rstest::rstest;

use linkvault::services::validation::validate;

#[test]
fn test_too_short_title_with_valid_url() {
    let report = validate("ab", "https://x.com");
    assert_eq!(
        report.title.as_deref(),
        Some("Title must be at least 3 characters")
    );
    assert!(report.url.is_none());
    assert!(!report.is_valid());
}

#[test]
fn test_bad_scheme_is_rejected() {
    let report = validate("My Link", "ftp://x.com");
    assert!(report.title.is_none());
    assert_eq!(
        report.url.as_deref(),
        Some("URL must start with http:// or https://")
    );
}

#[test]
fn test_valid_input_has_no_errors() {
    let report = validate("My Link", "https://x.com");
    assert!(report.is_valid());
    assert!(report.title.is_none());
    assert!(report.url.is_none());
}

/// Empty fields report "required" before any other check.
#[rstest]
#[case("", "Title is required")]
#[case("   ", "Title is required")]
#[case("\t\n", "Title is required")]
#[case("ab", "Title must be at least 3 characters")]
#[case(" hi ", "Title must be at least 3 characters")]
fn test_title_error_messages(#[case] title: &str, #[case] expected: &str) {
    let report = validate(title, "https://example.com");
    assert_eq!(report.title.as_deref(), Some(expected), "title = {:?}", title);
}

/// URL checks short-circuit: required, then scheme prefix, then parseability.
#[rstest]
#[case("", "URL is required")]
#[case("   ", "URL is required")]
#[case("example.com", "URL must start with http:// or https://")]
#[case("ftp://example.com", "URL must start with http:// or https://")]
#[case("http://", "Please enter a valid URL")]
fn test_url_error_messages(#[case] url: &str, #[case] expected: &str) {
    let report = validate("My Link", url);
    assert_eq!(report.url.as_deref(), Some(expected), "url = {:?}", url);
}

/// The scheme check is case-insensitive, as browsers treat schemes.
#[rstest]
#[case("HTTPS://EXAMPLE.COM")]
#[case("Http://example.com")]
fn test_scheme_check_is_case_insensitive(#[case] url: &str) {
    let report = validate("My Link", url);
    assert!(report.is_valid(), "url = {:?} -> {:?}", url, report.url);
}

#[test]
fn test_both_fields_reported_independently() {
    let report = validate("", "not-a-url");
    assert_eq!(report.title.as_deref(), Some("Title is required"));
    assert_eq!(
        report.url.as_deref(),
        Some("URL must start with http:// or https://")
    );
}

#[test]
fn test_title_exactly_three_chars_passes() {
    let report = validate("abc", "https://example.com");
    assert!(report.title.is_none());
}
