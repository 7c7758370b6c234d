//! HTTP client for the hosted Linkvault backend.
//!
//! Talks to the backend's REST surface with a blocking `reqwest` client.
//! The change feed is a streaming NDJSON endpoint: one `ChangeEvent` JSON
//! object per line, forwarded into the `ChangeFeed` channel by a background
//! reader thread. The thread exits when the stream ends or the feed is
//! dropped on the consumer side.

use std::io::{BufRead, BufReader};
use std::sync::mpsc;
use std::thread;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::store::client::{ChangeFeed, RemoteStore};
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::StoreError;
use crate::types::event::ChangeEvent;
use crate::types::session::{Session, User};
use crate::types::settings::{BackendSettings, OAuthSettings};

#[derive(Deserialize)]
struct SignInResponse {
    url: String,
}

/// Remote store client backed by the hosted backend's REST surface.
pub struct HttpStore {
    client: Client,
    base_url: String,
    api_key: String,
    oauth_redirect: String,
}

impl HttpStore {
    /// Creates a client from backend connection settings.
    pub fn new(backend: &BackendSettings, oauth: &OAuthSettings) -> Result<Self, StoreError> {
        let client = Client::builder()
            .build()
            .map_err(|e| StoreError::Subscribe(e.to_string()))?;
        Ok(Self {
            client,
            base_url: backend.base_url.trim_end_matches('/').to_string(),
            api_key: backend.api_key.clone(),
            oauth_redirect: oauth.redirect_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_key)
        }
    }

    /// GET helper returning `None` on 204 (the backend's "no session" answer).
    fn get_optional<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, StoreError> {
        let resp = self
            .authorize(self.client.get(self.endpoint(path)))
            .send()
            .map_err(|e| StoreError::Auth(e.to_string()))?;
        if resp.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(StoreError::Auth(format!(
                "{} returned {}",
                path,
                resp.status()
            )));
        }
        resp.json::<T>()
            .map(Some)
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Forwards NDJSON feed lines into `tx` until the stream or consumer ends.
    fn pump_feed(resp: Response, tx: mpsc::Sender<ChangeEvent>) {
        let reader = BufReader::new(resp);
        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            let event: ChangeEvent = match serde_json::from_str(&line) {
                Ok(e) => e,
                // Malformed feed lines are dropped; the stream stays up.
                Err(_) => continue,
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    }
}

impl RemoteStore for HttpStore {
    fn get_session(&self) -> Result<Option<Session>, StoreError> {
        self.get_optional("/auth/session")
    }

    fn get_current_user(&self) -> Result<Option<User>, StoreError> {
        self.get_optional("/auth/user")
    }

    fn query_bookmarks(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let resp = self
            .authorize(self.client.get(self.endpoint("/bookmarks")))
            .query(&[("owner_id", owner_id), ("order", "created_at.desc")])
            .send()
            .map_err(|e| StoreError::Fetch(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Fetch(format!(
                "query returned {}",
                resp.status()
            )));
        }
        let mut records: Vec<Bookmark> = resp
            .json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn insert_bookmark(&self, record: &NewBookmark) -> Result<Bookmark, StoreError> {
        let resp = self
            .authorize(self.client.post(self.endpoint("/bookmarks")))
            .json(record)
            .send()
            .map_err(|e| StoreError::Mutation(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Mutation(format!(
                "insert returned {}",
                resp.status()
            )));
        }
        resp.json().map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn delete_bookmark(&self, id: &str) -> Result<(), StoreError> {
        let resp = self
            .authorize(
                self.client
                    .delete(self.endpoint(&format!("/bookmarks/{}", id))),
            )
            .send()
            .map_err(|e| StoreError::Mutation(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Mutation(format!(
                "delete returned {}",
                resp.status()
            )));
        }
        Ok(())
    }

    fn subscribe_changes(&self, owner_id: &str) -> Result<ChangeFeed, StoreError> {
        let resp = self
            .authorize(self.client.get(self.endpoint("/bookmarks/changes")))
            .query(&[("owner_id", owner_id)])
            .send()
            .map_err(|e| StoreError::Subscribe(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Subscribe(format!(
                "changes returned {}",
                resp.status()
            )));
        }
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || Self::pump_feed(resp, tx));
        Ok(ChangeFeed::new(rx))
    }

    fn sign_in_with_oauth(&self, provider: &str) -> Result<String, StoreError> {
        let resp = self
            .authorize(self.client.post(self.endpoint("/auth/signin")))
            .json(&serde_json::json!({
                "provider": provider,
                "redirect_to": self.oauth_redirect,
            }))
            .send()
            .map_err(|e| StoreError::Auth(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Auth(format!(
                "signin returned {}",
                resp.status()
            )));
        }
        let body: SignInResponse = resp
            .json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(body.url)
    }

    fn sign_out(&self) -> Result<(), StoreError> {
        let resp = self
            .authorize(self.client.post(self.endpoint("/auth/signout")))
            .send()
            .map_err(|e| StoreError::Auth(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Auth(format!(
                "signout returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
