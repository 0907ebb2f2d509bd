// Auth gateway: register/login/logout against the backend, normalizing
// success and error shapes. Successful auth writes the session to the
// store before any redirect is suggested to the caller.

use crate::client::{ApiClient, ClientError};
use cliniq_contracts::{AuthData, LoginRequest, RegisterRequest, UserSession};
use cliniq_core::{
    redirect_for, validate_credentials, validate_registration, SessionStore, StoreError,
    ValidationError, LOGIN_ROUTE,
};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AuthError {
    /// Caught before any network call; no request was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The backend rejected the attempt; carries its message or a fallback.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A session plus where it should land.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub session: UserSession,
    pub redirect: &'static str,
}

pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, AuthError> {
    validate_credentials(email, password)?;

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let data = client
        .login_user(&request)
        .await
        .map_err(|err| rejection(err, "Invalid credentials"))?;

    let outcome = persist(client, data)?;
    info!(role = %outcome.session.role, "login succeeded");
    Ok(outcome)
}

pub async fn register(
    client: &ApiClient,
    profile: RegisterRequest,
) -> Result<AuthOutcome, AuthError> {
    validate_registration(&profile)?;

    let data = client
        .register_user(&profile)
        .await
        .map_err(|err| rejection(err, "Registration failed"))?;

    let outcome = persist(client, data)?;
    info!(role = %outcome.session.role, "registration succeeded");
    Ok(outcome)
}

/// Clears the store and reports the login entry point. Performs no server
/// call; succeeds locally regardless of network state and is idempotent.
pub fn logout(store: &dyn SessionStore) -> &'static str {
    if let Err(err) = store.clear() {
        warn!(error = %err, "failed to clear session store on logout");
    }
    LOGIN_ROUTE
}

/// Session is saved before the redirect is handed back.
fn persist(client: &ApiClient, data: AuthData) -> Result<AuthOutcome, AuthError> {
    let session = UserSession {
        id: data.user.id,
        name: data.user.name,
        email: data.user.email,
        role: data.user.role,
        token: data.token,
    };
    client.store().save(&session)?;
    let redirect = redirect_for(&session.role);
    Ok(AuthOutcome { session, redirect })
}

fn rejection(err: ClientError, fallback: &str) -> AuthError {
    match err {
        ClientError::Api { message, .. } if !message.trim().is_empty() => {
            AuthError::Rejected(message)
        }
        _ => AuthError::Rejected(fallback.to_string()),
    }
}
