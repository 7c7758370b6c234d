//! In-memory remote store for Linkvault.
//!
//! Backend stand-in used by the demo binary and the test suite. Behaves like
//! the hosted backend from the client's perspective: it assigns ids and
//! timestamps on insert, filters reads and subscriptions by owner, and
//! broadcasts change events to live feeds. Deleting an unknown id is a
//! no-op, matching the hosted backend's delete-by-filter semantics.

use std::sync::mpsc::{self, Sender};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::store::client::{ChangeFeed, RemoteStore};
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::StoreError;
use crate::types::event::ChangeEvent;
use crate::types::session::{Session, User};

struct Subscriber {
    owner_id: String,
    tx: Sender<ChangeEvent>,
}

struct Inner {
    session: Option<Session>,
    bookmarks: Vec<Bookmark>,
    subscribers: Vec<Subscriber>,
}

/// In-memory store with owner-filtered change broadcast.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                session: None,
                bookmarks: Vec::new(),
                subscribers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Opens a session for the given user, as the backend would after a
    /// completed OAuth redirect.
    pub fn open_session(&self, user_id: &str, email: Option<&str>) {
        let mut inner = self.lock();
        inner.session = Some(Session {
            user: User {
                id: user_id.to_string(),
                email: email.map(str::to_string),
            },
            access_token: Uuid::new_v4().to_string(),
            expires_at: Self::now() + 3600,
        });
    }

    /// Server-side update of an existing bookmark's title and url.
    ///
    /// The client exposes no edit surface; only the store itself produces
    /// `Updated` events. Returns `false` if the id is unknown.
    pub fn update_bookmark(&self, id: &str, title: &str, url: &str) -> bool {
        let mut inner = self.lock();
        let record = match inner.bookmarks.iter_mut().find(|b| b.id == id) {
            Some(b) => {
                b.title = title.to_string();
                b.url = url.to_string();
                b.clone()
            }
            None => return false,
        };
        let owner_id = record.owner_id.clone();
        Self::broadcast(&mut inner, &owner_id, ChangeEvent::Updated(record));
        true
    }

    /// Number of records currently stored, across all owners.
    pub fn record_count(&self) -> usize {
        self.lock().bookmarks.len()
    }

    /// Sends `event` to every live subscriber whose owner filter matches,
    /// pruning subscribers whose feed has been dropped.
    fn broadcast(inner: &mut Inner, owner_id: &str, event: ChangeEvent) {
        inner
            .subscribers
            .retain(|s| s.owner_id != owner_id || s.tx.send(event.clone()).is_ok());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteStore for MemoryStore {
    fn get_session(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.lock().session.clone())
    }

    fn get_current_user(&self) -> Result<Option<User>, StoreError> {
        Ok(self.lock().session.as_ref().map(|s| s.user.clone()))
    }

    fn query_bookmarks(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let inner = self.lock();
        let mut records: Vec<Bookmark> = inner
            .bookmarks
            .iter()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn insert_bookmark(&self, record: &NewBookmark) -> Result<Bookmark, StoreError> {
        let mut inner = self.lock();
        let stored = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: record.title.clone(),
            url: record.url.clone(),
            owner_id: record.owner_id.clone(),
            created_at: Self::now(),
        };
        inner.bookmarks.push(stored.clone());
        let owner_id = stored.owner_id.clone();
        Self::broadcast(&mut inner, &owner_id, ChangeEvent::Inserted(stored.clone()));
        Ok(stored)
    }

    fn delete_bookmark(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let owner_id = match inner.bookmarks.iter().find(|b| b.id == id) {
            Some(b) => b.owner_id.clone(),
            None => return Ok(()),
        };
        inner.bookmarks.retain(|b| b.id != id);
        Self::broadcast(
            &mut inner,
            &owner_id,
            ChangeEvent::Deleted { id: id.to_string() },
        );
        Ok(())
    }

    fn subscribe_changes(&self, owner_id: &str) -> Result<ChangeFeed, StoreError> {
        let (tx, rx) = mpsc::channel();
        self.lock().subscribers.push(Subscriber {
            owner_id: owner_id.to_string(),
            tx,
        });
        Ok(ChangeFeed::new(rx))
    }

    fn sign_in_with_oauth(&self, provider: &str) -> Result<String, StoreError> {
        // The in-memory backend completes the whole redirect dance at once.
        self.open_session("demo-user", Some("demo@example.com"));
        Ok(format!("memory://oauth/{}", provider))
    }

    fn sign_out(&self) -> Result<(), StoreError> {
        self.lock().session = None;
        Ok(())
    }
}
