// Doctor DTOs

use serde::{Deserialize, Serialize};

/// A doctor record. `userId` arrives either populated (an embedded user
/// summary) or as a bare id string depending on the endpoint; both shapes
/// parse into `UserRef`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

impl Doctor {
    /// Linked account id, whichever shape the backend sent.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(UserRef::id)
    }

    /// Linked account email, only available when the ref was populated.
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref().and_then(UserRef::email)
    }
}

/// A reference to a user account: populated summary or bare id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Linked(LinkedUser),
    Id(String),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Linked(user) => &user.id,
            UserRef::Id(id) => id,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            UserRef::Linked(user) => user.email.as_deref(),
            UserRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request to register a doctor record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub specialization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Request to update a doctor record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: String,
    pub specialization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
