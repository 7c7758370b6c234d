//! RPC method handler for the Linkvault JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls from the
//! browser-UI host to the `App` struct. This is the presentation layer's
//! bridge: it never mutates the visible collection directly. Inserts and
//! deletes are submitted to the store and show up via the change feed.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::session_gate::GateDecision;
use crate::managers::sync_manager::SyncManagerTrait;
use crate::types::validation::FieldState;

use serde_json::{json, Value};

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Auth ───
        "auth.session" => {
            // View activation: gate the protected view and, when a session
            // exists, start the snapshot fetch and the subscription.
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.startup() {
                GateDecision::Proceed { owner_id } => {
                    Ok(json!({"authenticated": true, "owner_id": owner_id}))
                }
                GateDecision::RedirectToLogin => Ok(json!({"authenticated": false})),
            }
        }
        "auth.signin" => {
            let provider = params.get("provider").and_then(|v| v.as_str());
            let a = app.lock().map_err(|e| e.to_string())?;
            let url = a.request_sign_in(provider).ok_or("sign-in failed")?;
            Ok(json!({"url": url}))
        }
        "auth.signout" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.request_sign_out();
            Ok(json!({"ok": true}))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let title = params
                .get("title")
                .and_then(|v| v.as_str())
                .ok_or("missing title")?;
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let report = a.request_insert(title, url);
            if report.is_valid() {
                // No record echo: the inserted row reaches the collection
                // only through the change feed.
                Ok(json!({"ok": true}))
            } else {
                let title_state = FieldState::submitted(report.title);
                let url_state = FieldState::submitted(report.url);
                Ok(json!({"ok": false, "fields": {"title": title_state, "url": url_state}}))
            }
        }
        "bookmark.delete" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            a.request_delete(id);
            Ok(json!({"ok": true}))
        }
        "bookmark.list" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let arr: Vec<Value> = a
                .bookmarks()
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id,
                        "title": b.title,
                        "url": b.url,
                        "owner_id": b.owner_id,
                        "created_at": b.created_at,
                    })
                })
                .collect();
            Ok(json!(arr))
        }

        // ─── Sync ───
        "sync.status" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let count = a.bookmarks().len();
            let subscribed = a
                .sync
                .as_ref()
                .map(|s| s.is_subscribed())
                .unwrap_or(false);
            Ok(json!({"subscribed": subscribed, "count": count}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
