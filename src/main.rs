//! Linkvault — a minimal personal bookmark manager client with live backend sync.
//!
//! Entry point: runs an interactive console demo against the in-memory
//! backend, walking every component. The production surface is the
//! `linkvault-rpc` binary, which bridges the browser-UI host to a hosted
//! backend over NDJSON.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               Linkvault v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Personal bookmarks with live backend synchronization   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_settings();
    demo_validation();
    demo_session_gate();
    demo_memory_store();
    demo_reducer();
    demo_live_sync();
    demo_teardown();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 8 components demonstrated successfully!");
    println!("  Linkvault is ready for UI host integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_settings() {
    use linkvault::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Backend: {}", settings.backend.base_url);
    println!("  OAuth provider: {}", settings.oauth.provider);
    println!("  Redirect: {}", settings.oauth.redirect_url);

    engine
        .set_value("oauth.provider", serde_json::json!("github"))
        .unwrap();
    println!("  Changed provider to: {}", engine.get_settings().oauth.provider);

    engine.reset().unwrap();
    println!("  Reset to defaults: provider = {}", engine.get_settings().oauth.provider);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_validation() {
    use linkvault::services::validation::validate;
    section("Form Validation");

    let report = validate("ab", "https://x.com");
    println!("  ('ab', valid url) -> title: {:?}", report.title);

    let report = validate("My Link", "ftp://x.com");
    println!("  ('My Link', ftp url) -> url: {:?}", report.url);

    let report = validate("", "");
    println!("  (empty, empty) -> title: {:?}, url: {:?}", report.title, report.url);

    let report = validate("My Link", "https://x.com");
    println!("  ('My Link', 'https://x.com') -> valid: {}", report.is_valid());
    println!("  ✓ Validation OK");
    println!();
}

fn demo_session_gate() {
    use linkvault::managers::session_gate::{resolve_session, GateDecision};
    use linkvault::store::memory::MemoryStore;
    section("Session Gate");

    let store = MemoryStore::new();
    let decision = resolve_session(&store);
    println!("  No session -> {:?}", decision);
    assert_eq!(decision, GateDecision::RedirectToLogin);

    store.open_session("alice", Some("alice@example.com"));
    let decision = resolve_session(&store);
    println!("  With session -> {:?}", decision);
    println!("  ✓ SessionGate OK");
    println!();
}

fn demo_memory_store() {
    use linkvault::store::client::RemoteStore;
    use linkvault::store::memory::MemoryStore;
    use linkvault::types::bookmark::NewBookmark;
    section("In-Memory Remote Store");

    let store = MemoryStore::new();
    store.open_session("alice", None);

    let stored = store
        .insert_bookmark(&NewBookmark {
            title: "Rust".to_string(),
            url: "https://rust-lang.org".to_string(),
            owner_id: "alice".to_string(),
        })
        .unwrap();
    println!("  Inserted bookmark, store assigned id {}", &stored.id[..8]);

    let records = store.query_bookmarks("alice").unwrap();
    println!("  Snapshot for alice: {} record(s)", records.len());

    let other = store.query_bookmarks("bob").unwrap();
    println!("  Snapshot for bob: {} record(s) (owner filter)", other.len());

    store.delete_bookmark(&stored.id).unwrap();
    println!("  Deleted, remaining: {}", store.record_count());
    println!("  ✓ MemoryStore OK");
    println!();
}

fn demo_reducer() {
    use linkvault::managers::sync_manager::apply;
    use linkvault::types::bookmark::Bookmark;
    use linkvault::types::event::ChangeEvent;
    section("Sync Reducer (pure)");

    let record = |id: &str, at: i64| Bookmark {
        id: id.to_string(),
        title: format!("Bookmark {}", id),
        url: format!("https://example.com/{}", id),
        owner_id: "alice".to_string(),
        created_at: at,
    };

    let collection = vec![record("1", 100)];
    let collection = apply(collection, ChangeEvent::Inserted(record("2", 200)));
    println!("  Snapshot [1] + Inserted(2) -> {:?}", ids(&collection));

    let collection = apply(collection, ChangeEvent::Deleted { id: "1".to_string() });
    println!("  + Deleted(1) -> {:?}", ids(&collection));

    let collection = apply(collection, ChangeEvent::Inserted(record("2", 200)));
    println!("  + duplicate Inserted(2) -> {:?} (len {})", ids(&collection), collection.len());
    assert_eq!(collection.len(), 1);
    println!("  ✓ Reducer OK");
    println!();
}

fn ids(collection: &[linkvault::types::bookmark::Bookmark]) -> Vec<&str> {
    collection.iter().map(|b| b.id.as_str()).collect()
}

fn demo_live_sync() {
    use linkvault::managers::sync_manager::{SyncManager, SyncManagerTrait};
    use linkvault::store::client::RemoteStore;
    use linkvault::store::memory::MemoryStore;
    use linkvault::types::bookmark::NewBookmark;
    section("Live Synchronization");

    let store = MemoryStore::new();
    store.open_session("alice", None);
    store
        .insert_bookmark(&NewBookmark {
            title: "Docs.rs".to_string(),
            url: "https://docs.rs".to_string(),
            owner_id: "alice".to_string(),
        })
        .unwrap();

    let mut sync = SyncManager::new("alice");
    let seeded = sync.initialize(&store).unwrap();
    sync.subscribe(&store).unwrap();
    println!("  Snapshot seeded {} record(s)", seeded);

    store
        .insert_bookmark(&NewBookmark {
            title: "Crates.io".to_string(),
            url: "https://crates.io".to_string(),
            owner_id: "alice".to_string(),
        })
        .unwrap();
    let applied = sync.drain_events();
    println!("  Live insert -> {} event applied, head = {}", applied, sync.bookmarks()[0].title);

    let victim = sync.bookmarks()[1].id.clone();
    store.delete_bookmark(&victim).unwrap();
    sync.drain_events();
    println!("  Live delete -> {} record(s) visible", sync.bookmarks().len());
    println!("  ✓ SyncManager OK");
    println!();
}

fn demo_teardown() {
    use linkvault::managers::sync_manager::{SyncManager, SyncManagerTrait};
    use linkvault::store::client::RemoteStore;
    use linkvault::store::memory::MemoryStore;
    use linkvault::types::bookmark::NewBookmark;
    section("Subscription Teardown");

    let store = MemoryStore::new();
    store.open_session("alice", None);

    let mut sync = SyncManager::new("alice");
    sync.initialize(&store).unwrap();
    sync.subscribe(&store).unwrap();
    println!("  Subscribed: {}", sync.is_subscribed());

    sync.teardown();
    store
        .insert_bookmark(&NewBookmark {
            title: "After teardown".to_string(),
            url: "https://example.com/late".to_string(),
            owner_id: "alice".to_string(),
        })
        .unwrap();
    let applied = sync.drain_events();
    println!("  Insert after teardown -> {} events applied, {} visible", applied, sync.bookmarks().len());

    sync.teardown();
    println!("  Second teardown: no-op, subscribed = {}", sync.is_subscribed());
    println!("  ✓ Teardown OK");
    println!();
}

fn demo_app_core() {
    use std::sync::Arc;
    use linkvault::app::App;
    use linkvault::store::memory::MemoryStore;
    section("App Core (full lifecycle)");

    let mut app = App::new(
        Arc::new(MemoryStore::new()),
        Some("demo_app_settings.json".to_string()),
    );

    let url = app.request_sign_in(None).unwrap();
    println!("  Sign-in redirect: {}", url);

    let decision = app.startup();
    println!("  Startup -> {:?}", decision);

    let report = app.request_insert("ab", "https://rust-lang.org");
    println!("  Insert 'ab' rejected by validation: {:?}", report.title);

    app.request_insert("Rust Book", "https://doc.rust-lang.org/book");
    println!("  Visible after insert: {} bookmark(s)", app.bookmarks().len());

    let id = app.bookmarks()[0].id.clone();
    app.request_delete(&id);
    println!("  Visible after delete: {} bookmark(s)", app.bookmarks().len());

    app.request_sign_out();
    println!("  Signed out, authenticated = {}", app.is_authenticated());
    let _ = std::fs::remove_file("demo_app_settings.json");
    println!("  ✓ App Core OK");
}
