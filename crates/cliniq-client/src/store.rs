// SessionStore implementations: a JSON file at a well-known path for the
// CLI, and an in-memory store for tests and embedding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use cliniq_contracts::UserSession;
use cliniq_core::{SessionStore, StoreError};
use tracing::warn;

/// Persists the session record as pretty JSON at a fixed path.
/// `CLINIQ_SESSION_FILE` overrides the default `~/.cliniq/session.json`.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("CLINIQ_SESSION_FILE") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home).join(".cliniq").join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &UserSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Malformed content is treated exactly like no session at all.
    fn load(&self) -> Option<UserSession> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "stored session is malformed, treating as absent");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process store, mainly for tests and embedded use.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: Mutex<Option<UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, session: &UserSession) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Option<UserSession> {
        self.inner.lock().unwrap().clone()
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}
