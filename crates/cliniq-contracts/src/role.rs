// Account roles

use serde::{Deserialize, Serialize};

/// Role attached to every account. Determines which dashboard a session
/// lands on and which API calls the client will issue.
///
/// The backend owns the role enumeration; values this client does not know
/// about deserialize into `Unknown` instead of failing, so a session record
/// written by a newer backend still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    Receptionist,
    #[serde(untagged)]
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::Receptionist => "receptionist",
            Role::Unknown(other) => other,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "doctor" => Role::Doctor,
            "patient" => Role::Patient,
            "receptionist" => Role::Receptionist,
            other => Role::Unknown(other.to_string()),
        }
    }
}
