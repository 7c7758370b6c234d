use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;

/// A single change notification from the remote store's live feed.
///
/// Events are transient: each one is consumed by the sync manager's reducer
/// and discarded. On the wire they carry a `type` discriminator
/// (`inserted` / `deleted` / `updated`), one JSON object per feed line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    Inserted(Bookmark),
    Deleted { id: String },
    Updated(Bookmark),
}
