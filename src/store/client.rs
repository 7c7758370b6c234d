//! Remote store client interface for Linkvault.
//!
//! The hosted backend provides authentication, durable bookmark storage, and
//! an owner-filtered change feed. This module defines the trait the rest of
//! the application consumes; `memory` and `http` provide implementations.

use std::sync::mpsc::Receiver;

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::StoreError;
use crate::types::event::ChangeEvent;
use crate::types::session::{Session, User};

/// Live change feed for one owner's bookmarks.
///
/// Events arrive in the order the backend emitted them. Dropping the feed
/// releases the subscription: the producer's next send fails and it stops
/// forwarding. Pending events still buffered at that point are discarded,
/// never delivered.
pub struct ChangeFeed {
    rx: Receiver<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new(rx: Receiver<ChangeEvent>) -> Self {
        Self { rx }
    }

    /// Returns the next pending event without blocking, or `None` when the
    /// feed is currently empty or the producer has gone away.
    pub fn try_next(&self) -> Option<ChangeEvent> {
        self.rx.try_recv().ok()
    }
}

/// Trait defining the remote store operations consumed by the application.
///
/// Mutations issued through this trait are reflected locally only via the
/// change feed; callers never splice an insert or delete result into their
/// own view.
pub trait RemoteStore: Send + Sync {
    fn get_session(&self) -> Result<Option<Session>, StoreError>;
    fn get_current_user(&self) -> Result<Option<User>, StoreError>;
    /// All bookmarks for `owner_id`, ordered by `created_at` descending.
    fn query_bookmarks(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError>;
    /// Inserts a bookmark; the store assigns `id` and `created_at`.
    fn insert_bookmark(&self, record: &NewBookmark) -> Result<Bookmark, StoreError>;
    fn delete_bookmark(&self, id: &str) -> Result<(), StoreError>;
    /// Establishes a live change feed restricted to `owner_id`.
    fn subscribe_changes(&self, owner_id: &str) -> Result<ChangeFeed, StoreError>;
    /// Starts an OAuth sign-in; returns the redirect URL for the UI host to open.
    fn sign_in_with_oauth(&self, provider: &str) -> Result<String, StoreError>;
    fn sign_out(&self) -> Result<(), StoreError>;
}
