// The client-persisted session record

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// The one record the client persists: who is logged in and their bearer
/// token. Written on successful login/registration, removed on logout or a
/// rejected token. No expiry is tracked client-side; validity is discovered
/// when the server rejects a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}
