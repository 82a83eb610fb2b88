//! Persisted session storage.
//!
//! The session is two independent records in a key-value store: the
//! raw auth token and the JSON-encoded user. The store is injected
//! into the client so tests run without touching the filesystem.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Storage key for the raw auth token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key for the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Marker older pages wrote alongside the token; cleared on logout.
pub const LEGACY_LOGGED_IN_KEY: &str = "loggedIn";

/// Synchronous key-value store holding the persisted session.
///
/// Reads and writes are not transactional; concurrent writers race
/// and the last write wins.
pub trait SessionStore: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory session store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Session store backed by a single JSON document on disk.
///
/// Loading is lenient: a missing or corrupt file starts the store
/// empty. Every write persists the whole document; a failed write is
/// logged and the in-memory state kept.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open a store backed by the given file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// File the store persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string(entries) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), error = %e, "Failed to persist session");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to encode session");
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries);
    }
}
