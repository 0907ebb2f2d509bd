// SessionStore trait: the seam between domain logic and wherever the
// session record actually lives (file on disk, memory in tests).

use cliniq_contracts::UserSession;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Holds the single session record that answers "is someone logged in".
///
/// `load` returns `None` for absent *and* for malformed content: a session
/// record that no longer parses must behave exactly like no session at all,
/// never crash the caller. `clear` is idempotent.
pub trait SessionStore: Send + Sync {
    fn save(&self, session: &UserSession) -> Result<(), StoreError>;
    fn load(&self) -> Option<UserSession>;
    fn clear(&self) -> Result<(), StoreError>;
}
