// Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

/// Envelope wrapping every backend response:
/// `{success: bool, message?: string, data?: T}`.
/// Any other shape is treated as an error by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    // no serde(default) here: it would put a `T: Default` bound on the
    // derived impl, and missing Option fields decode as None anyway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
