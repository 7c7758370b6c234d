//! Bookmark synchronization state manager.
//!
//! Maintains a single ordered, deduplicated collection of one owner's
//! bookmarks, seeded by a one-time snapshot and kept current by the remote
//! store's change feed. The snapshot fetch and the subscription may be
//! started in either order with neither awaited first; the insert
//! deduplication rule in [`apply`] makes the final state convergent
//! regardless of which side of the race a record arrives on.
//!
//! Visible order is snapshot order with newly inserted records prepended in
//! event-arrival order. There is no re-sort by `created_at` on mutation, so
//! bulk historical inserts arriving as live events will not land in strict
//! timestamp order. Accepted limitation, not a bug.

use crate::store::client::{ChangeFeed, RemoteStore};
use crate::types::bookmark::Bookmark;
use crate::types::errors::SyncError;
use crate::types::event::ChangeEvent;

/// Pure reducer combining the current collection and one change event.
///
/// - `Inserted`: ignored if the id is already present (the record arrived
///   via the snapshot, or the event was already applied); otherwise the
///   record is prepended.
/// - `Deleted`: removes the matching entry; an absent id is a no-op.
/// - `Updated`: replaces the matching entry in place, preserving its
///   position; an absent id is a no-op.
pub fn apply(mut bookmarks: Vec<Bookmark>, event: ChangeEvent) -> Vec<Bookmark> {
    match event {
        ChangeEvent::Inserted(record) => {
            if bookmarks.iter().any(|b| b.id == record.id) {
                return bookmarks;
            }
            bookmarks.insert(0, record);
            bookmarks
        }
        ChangeEvent::Deleted { id } => {
            bookmarks.retain(|b| b.id != id);
            bookmarks
        }
        ChangeEvent::Updated(record) => {
            if let Some(slot) = bookmarks.iter_mut().find(|b| b.id == record.id) {
                *slot = record;
            }
            bookmarks
        }
    }
}

/// Trait defining the synchronization state manager interface.
pub trait SyncManagerTrait {
    /// One-time snapshot read. Seeds the collection and returns the record
    /// count. On failure the visible collection is left empty and the error
    /// is returned; there is no automatic retry, though the caller may call
    /// `initialize` again.
    fn initialize(&mut self, store: &dyn RemoteStore) -> Result<usize, SyncError>;
    /// Establishes the live change feed for this owner.
    fn subscribe(&mut self, store: &dyn RemoteStore) -> Result<(), SyncError>;
    /// Applies every pending feed event through the reducer, in arrival
    /// order. Returns how many events were applied.
    fn drain_events(&mut self) -> usize;
    /// The current visible collection.
    fn bookmarks(&self) -> &[Bookmark];
    fn is_subscribed(&self) -> bool;
    /// Releases the subscription. Pending undelivered events are discarded,
    /// never applied: after this returns, nothing delivered through the old
    /// feed can change the collection. Idempotent, and safe to call when no
    /// feed was ever established.
    fn teardown(&mut self);
}

/// Synchronization state manager for one signed-in owner.
pub struct SyncManager {
    owner_id: String,
    bookmarks: Vec<Bookmark>,
    feed: Option<ChangeFeed>,
}

impl SyncManager {
    pub fn new(owner_id: &str) -> Self {
        Self {
            owner_id: owner_id.to_string(),
            bookmarks: Vec::new(),
            feed: None,
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

impl SyncManagerTrait for SyncManager {
    fn initialize(&mut self, store: &dyn RemoteStore) -> Result<usize, SyncError> {
        match store.query_bookmarks(&self.owner_id) {
            Ok(records) => {
                // The snapshot replaces the collection wholesale. Events
                // drained before this point are superseded by it; events
                // drained after it dedup against it.
                self.bookmarks = records;
                Ok(self.bookmarks.len())
            }
            Err(e) => {
                self.bookmarks.clear();
                Err(SyncError::Fetch(e.to_string()))
            }
        }
    }

    fn subscribe(&mut self, store: &dyn RemoteStore) -> Result<(), SyncError> {
        let feed = store
            .subscribe_changes(&self.owner_id)
            .map_err(|e| SyncError::Subscribe(e.to_string()))?;
        self.feed = Some(feed);
        Ok(())
    }

    fn drain_events(&mut self) -> usize {
        let feed = match &self.feed {
            Some(f) => f,
            None => return 0,
        };
        let mut applied = 0;
        while let Some(event) = feed.try_next() {
            self.bookmarks = apply(std::mem::take(&mut self.bookmarks), event);
            applied += 1;
        }
        applied
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn is_subscribed(&self) -> bool {
        self.feed.is_some()
    }

    fn teardown(&mut self) {
        self.feed = None;
    }
}
