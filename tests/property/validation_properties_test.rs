//! Property-based tests for form validation.
//!
//! Validation is pure and deterministic, so invariants hold over the whole
//! input space: well-formed titles and URLs always pass, short or empty
//! titles always fail with the same message, and non-http(s) schemes never
//! get past the prefix check.

use proptest::prelude::*;

use linkvault::services::validation::validate;

/// Strategy for well-formed http(s) URLs.
fn arb_valid_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for titles that pass: at least 3 non-space characters.
fn arb_valid_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}[a-zA-Z0-9]"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn valid_input_always_passes(title in arb_valid_title(), url in arb_valid_url()) {
        let report = validate(&title, &url);
        prop_assert!(report.is_valid(), "title={:?} url={:?} -> {:?}", title, url, report);
    }

    #[test]
    fn validation_is_deterministic(title in ".{0,40}", url in ".{0,40}") {
        let first = validate(&title, &url);
        let second = validate(&title, &url);
        prop_assert_eq!(first, second);
    }

    // Titles under 3 trimmed characters never pass, whatever the URL says.
    #[test]
    fn short_titles_always_fail(title in "[a-z]{1,2}", url in arb_valid_url()) {
        let report = validate(&title, &url);
        prop_assert_eq!(report.title.as_deref(), Some("Title must be at least 3 characters"));
        prop_assert!(report.url.is_none());
    }

    // Schemes other than http/https are rejected at the prefix check,
    // before URL parsing even runs.
    #[test]
    fn non_http_schemes_always_fail(
        scheme in prop_oneof![Just("ftp"), Just("file"), Just("ws"), Just("mailto")],
        title in arb_valid_title(),
    ) {
        let url = format!("{}://example.com", scheme);
        let report = validate(&title, &url);
        prop_assert_eq!(report.url.as_deref(), Some("URL must start with http:// or https://"));
    }

    // Surrounding whitespace never changes the outcome.
    #[test]
    fn trimming_is_applied_to_both_fields(title in arb_valid_title(), url in arb_valid_url()) {
        let padded = validate(&format!("  {}  ", title), &format!("\t{} ", url));
        let bare = validate(&title, &url);
        prop_assert_eq!(padded, bare);
    }
}
