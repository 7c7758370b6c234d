use serde::{Deserialize, Serialize};

/// Outcome of validating the two user-editable bookmark fields.
///
/// `None` means the field passed; `Some` carries the message shown inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }
}

/// Per-field form state as presented to the UI host.
///
/// Owned by the presentation layer; the sync manager never sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldState {
    pub error: Option<String>,
    pub touched: bool,
}

impl FieldState {
    /// A field state for a just-submitted form: every field counts as touched.
    pub fn submitted(error: Option<String>) -> Self {
        Self {
            error,
            touched: true,
        }
    }
}
