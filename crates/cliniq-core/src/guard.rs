// Session guard: the once-per-surface check that a session exists and
// matches the required role before any data loading starts.

use crate::store::SessionStore;
use cliniq_contracts::{Role, UserSession};

/// Where denied users are sent.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Outcome of guarding a protected surface. `Authorized` is terminal for
/// the surface's lifetime until the user logs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Authorized(UserSession),
    Denied(DeniedReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeniedReason {
    /// No stored session, or stored data that no longer parses.
    NotLoggedIn,
    /// A session exists but its role does not match the surface.
    WrongRole { required: Role },
}

impl DeniedReason {
    /// User-facing notice. Wrong-role users get a generic denial, never a
    /// raw error.
    pub fn notice(&self) -> String {
        match self {
            DeniedReason::NotLoggedIn => "Please login first".to_string(),
            DeniedReason::WrongRole { required } => {
                format!("Access denied. {} only.", capitalize(required.as_str()))
            }
        }
    }

    /// Redirect target for the denial. Always the login entry point.
    pub fn redirect(&self) -> &'static str {
        LOGIN_ROUTE
    }
}

/// Guard a surface that requires a specific role. Issues no fetches; a
/// denial means the caller must redirect without loading anything.
pub fn check_session(store: &dyn SessionStore, required: Role) -> GuardOutcome {
    match store.load() {
        None => GuardOutcome::Denied(DeniedReason::NotLoggedIn),
        Some(session) if session.role != required => {
            GuardOutcome::Denied(DeniedReason::WrongRole { required })
        }
        Some(session) => GuardOutcome::Authorized(session),
    }
}

/// Guard a surface that only requires being logged in, role aside.
pub fn require_session(store: &dyn SessionStore) -> GuardOutcome {
    match store.load() {
        None => GuardOutcome::Denied(DeniedReason::NotLoggedIn),
        Some(session) => GuardOutcome::Authorized(session),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
