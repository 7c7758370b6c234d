//! Form validation for bookmark submissions.
//!
//! Pure and deterministic: the same input always produces the same report,
//! and nothing is sent to the remote store when a field fails. Per-field
//! checks short-circuit, so only the first applicable error is reported.

use url::Url;

use crate::types::validation::ValidationReport;

/// Validates the two user-editable bookmark fields.
pub fn validate(title: &str, url: &str) -> ValidationReport {
    ValidationReport {
        title: validate_title(title),
        url: validate_url(url),
    }
}

fn validate_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Some("Title is required".to_string());
    }
    if trimmed.chars().count() < 3 {
        return Some("Title must be at least 3 characters".to_string());
    }
    None
}

fn validate_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Some("URL is required".to_string());
    }
    let lowered = trimmed.to_lowercase();
    if !lowered.starts_with("http://") && !lowered.starts_with("https://") {
        return Some("URL must start with http:// or https://".to_string());
    }
    if Url::parse(trimmed).is_err() {
        return Some("Please enter a valid URL".to_string());
    }
    None
}
