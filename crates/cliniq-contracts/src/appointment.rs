// Appointment DTOs

use serde::{Deserialize, Serialize};

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(rename = "no-show")]
    NoShow,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no-show"),
        }
    }
}

/// An appointment. Patient/doctor refs arrive populated on some endpoints
/// and as bare id strings on others; `PartyRef` absorbs both.
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM`, both backend-formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "patientId")]
    pub patient: PartyRef,
    #[serde(rename = "doctorId", default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<PartyRef>,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Reference to a patient or doctor: populated summary or bare id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartyRef {
    Summary(PartySummary),
    Id(String),
}

impl PartyRef {
    pub fn id(&self) -> &str {
        match self {
            PartyRef::Summary(summary) => &summary.id,
            PartyRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PartyRef::Summary(summary) => summary.name.as_deref(),
            PartyRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartySummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}
