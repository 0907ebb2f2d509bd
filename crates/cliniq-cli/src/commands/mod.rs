pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod doctors;
pub mod patients;

use anyhow::Result;
use cliniq_contracts::{Role, UserSession};
use cliniq_core::{check_session, require_session, GuardOutcome, SessionStore};

/// Guard a command that requires a specific role. Denial prints nothing
/// but the notice and issues no fetches.
pub fn guard(store: &dyn SessionStore, required: Role) -> Result<UserSession> {
    match check_session(store, required) {
        GuardOutcome::Authorized(session) => Ok(session),
        GuardOutcome::Denied(reason) => anyhow::bail!("{} (try: cliniq login)", reason.notice()),
    }
}

/// Guard a command that only needs a session, whatever the role.
pub fn guard_any(store: &dyn SessionStore) -> Result<UserSession> {
    match require_session(store) {
        GuardOutcome::Authorized(session) => Ok(session),
        GuardOutcome::Denied(reason) => anyhow::bail!("{} (try: cliniq login)", reason.notice()),
    }
}
