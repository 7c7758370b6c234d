use serde::{Deserialize, Serialize};

/// A saved link, as stored by the remote backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub owner_id: String,
    pub created_at: i64,
}

/// Insert request for a new bookmark.
///
/// `id` and `created_at` are assigned by the remote store; the created record
/// is observed locally only through the change stream, never from this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub owner_id: String,
}
