// Pre-network validation for registration and login forms. A validation
// failure means no request is sent at all.

use cliniq_contracts::{RegisterRequest, Role};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn missing(what: &str) -> Self {
        ValidationError(format!("{} is required", what))
    }
}

/// Check role-independent and role-specific required fields:
/// patients need age and gender, doctors need a specialization.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::missing("Name"));
    }
    if request.email.trim().is_empty() {
        return Err(ValidationError::missing("Email"));
    }
    if request.password.is_empty() {
        return Err(ValidationError::missing("Password"));
    }

    match request.role {
        Role::Patient => {
            if request.age.is_none() {
                return Err(ValidationError::missing("Age"));
            }
            if request
                .gender
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
            {
                return Err(ValidationError::missing("Gender"));
            }
        }
        Role::Doctor => {
            if request
                .specialization
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
            {
                return Err(ValidationError::missing("Specialization"));
            }
        }
        _ => {}
    }

    Ok(())
}

/// Login needs both fields present before any request goes out.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError(
            "Email and password are required".to_string(),
        ));
    }
    Ok(())
}
