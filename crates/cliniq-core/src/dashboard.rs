// Dashboard view models and their reducers.
//
// Loaders (cliniq-client) fill these structs from list endpoints; every
// derived view (search filtering, stats, today's/upcoming slices) is a
// pure function of fetched collections plus caller-held UI state, so the
// same logic backs every role surface without network mocking in tests.

use cliniq_contracts::{Appointment, AppointmentStatus, Doctor, Patient};
use serde::Serialize;

/// Case-insensitive substring match. An empty search matches everything.
fn matches(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Admin tab state. Plain UI state, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Doctors,
    Patients,
}

impl AdminTab {
    pub fn parse(s: &str) -> Self {
        match s {
            "doctors" => AdminTab::Doctors,
            "patients" => AdminTab::Patients,
            _ => AdminTab::Overview,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminStats {
    pub total_doctors: usize,
    pub total_patients: usize,
    pub total_appointments: usize,
}

/// Everything the admin view shows. A failed fetch leaves its collection
/// empty and adds a notice; the other collections are unaffected.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminDashboard {
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub notices: Vec<String>,
}

impl AdminDashboard {
    pub fn stats(&self) -> AdminStats {
        AdminStats {
            total_doctors: self.doctors.len(),
            total_patients: self.patients.len(),
            total_appointments: self.appointments.len(),
        }
    }

    /// Doctors matching the search on name or specialization.
    pub fn filtered_doctors(&self, search: &str) -> Vec<&Doctor> {
        let needle = search.to_lowercase();
        self.doctors
            .iter()
            .filter(|d| matches(&d.name, &needle) || matches(&d.specialization, &needle))
            .collect()
    }

    /// Patients matching the search on name or gender.
    pub fn filtered_patients(&self, search: &str) -> Vec<&Patient> {
        let needle = search.to_lowercase();
        self.patients
            .iter()
            .filter(|p| matches(&p.name, &needle) || matches(&p.gender, &needle))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoctorStats {
    pub total_patients: usize,
    pub todays_appointments: usize,
}

/// The doctor view: the patient roster plus the appointment book narrowed
/// to one day.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorDashboard {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    /// `YYYY-MM-DD`; the loader defaults it to today.
    pub selected_date: String,
    pub notices: Vec<String>,
}

impl DoctorDashboard {
    pub fn todays_appointments(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == self.selected_date)
            .collect()
    }

    pub fn filtered_patients(&self, search: &str) -> Vec<&Patient> {
        let needle = search.to_lowercase();
        self.patients
            .iter()
            .filter(|p| matches(&p.name, &needle))
            .collect()
    }

    pub fn stats(&self) -> DoctorStats {
        DoctorStats {
            total_patients: self.patients.len(),
            todays_appointments: self.todays_appointments().len(),
        }
    }
}

/// The patient view: the caller's own record and their appointments.
/// `profile` is `None` when no patient record links back to the session's
/// user id; that is a notice, not a failure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientDashboard {
    pub profile: Option<Patient>,
    pub appointments: Vec<Appointment>,
    pub notices: Vec<String>,
}

impl PatientDashboard {
    /// The next three scheduled appointments, soonest first.
    pub fn upcoming_appointments(&self) -> Vec<&Appointment> {
        let mut upcoming: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .collect();
        upcoming.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        upcoming.truncate(3);
        upcoming
    }
}
