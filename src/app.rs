//! App Core for Linkvault.
//!
//! Wires the settings engine, the remote store client, the session gate,
//! and the sync manager together, and carries the presentation layer's
//! three mutating intents: insert, delete, sign-out. Mutations go to the
//! remote store and are reflected locally only via the change feed; the
//! app never splices a mutation result into the visible collection.

use std::sync::Arc;

use crate::managers::session_gate::{resolve_session, GateDecision};
use crate::managers::sync_manager::{SyncManager, SyncManagerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::validation::validate;
use crate::store::client::RemoteStore;
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::validation::ValidationReport;

/// Central application struct.
///
/// `sync` is `Some` only while a signed-in owner's collection is live;
/// a redirect decision or a sign-out clears it.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub store: Arc<dyn RemoteStore>,
    pub sync: Option<SyncManager>,
}

impl App {
    /// Creates an App over the given store client.
    ///
    /// Settings are loaded best-effort; a missing or unreadable file leaves
    /// the defaults in place.
    pub fn new(store: Arc<dyn RemoteStore>, settings_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let _ = settings_engine.load();
        Self {
            settings_engine,
            store,
            sync: None,
        }
    }

    /// View activation: run the session gate, and on a live session seed the
    /// collection and subscribe to the change feed.
    ///
    /// A failed snapshot fetch leaves an empty collection standing (no
    /// automatic retry); the subscription is attempted either way, mirroring
    /// the fire-and-forget startup of the hosted UI. On a redirect decision
    /// nothing else happens.
    pub fn startup(&mut self) -> GateDecision {
        let decision = resolve_session(self.store.as_ref());
        match &decision {
            GateDecision::Proceed { owner_id } => {
                let mut sync = SyncManager::new(owner_id);
                let _ = sync.initialize(self.store.as_ref());
                let _ = sync.subscribe(self.store.as_ref());
                self.sync = Some(sync);
            }
            GateDecision::RedirectToLogin => {
                self.sync = None;
            }
        }
        decision
    }

    /// Validates and, if clean, submits an insert for the current user.
    ///
    /// Mutation and auth failures are not surfaced here; the UI learns of a
    /// successful insert only through the change feed. See DESIGN.md for why
    /// this silent-failure contract is carried as-is.
    pub fn request_insert(&self, title: &str, url: &str) -> ValidationReport {
        let report = validate(title, url);
        if !report.is_valid() {
            return report;
        }
        if let Ok(Some(user)) = self.store.get_current_user() {
            let record = NewBookmark {
                title: title.trim().to_string(),
                url: url.trim().to_string(),
                owner_id: user.id,
            };
            let _ = self.store.insert_bookmark(&record);
        }
        report
    }

    /// Submits a delete. Same silent-failure contract as `request_insert`;
    /// the local collection changes only when the delete event arrives.
    pub fn request_delete(&self, id: &str) {
        let _ = self.store.delete_bookmark(id);
    }

    /// Starts an OAuth sign-in and returns the redirect URL for the UI host
    /// to open. Falls back to the configured provider when none is given.
    pub fn request_sign_in(&self, provider: Option<&str>) -> Option<String> {
        let provider = match provider {
            Some(p) => p.to_string(),
            None => self.settings_engine.get_settings().oauth.provider.clone(),
        };
        self.store.sign_in_with_oauth(&provider).ok()
    }

    /// Signs out and tears down the sync manager.
    pub fn request_sign_out(&mut self) {
        let _ = self.store.sign_out();
        if let Some(sync) = &mut self.sync {
            sync.teardown();
        }
        self.sync = None;
    }

    /// Drains pending change events, then returns the visible collection.
    /// Empty while signed out.
    pub fn bookmarks(&mut self) -> &[Bookmark] {
        match &mut self.sync {
            Some(sync) => {
                sync.drain_events();
                sync.bookmarks()
            }
            None => &[],
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.sync.is_some()
    }
}
