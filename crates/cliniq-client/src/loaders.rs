// Dashboard loaders: turn list endpoints into view-ready models, one shot
// per surface. Independent fetches run concurrently; failures become
// collection-scoped notices so one bad endpoint never blanks the rest.
// Loaders return complete models instead of mutating shared page state,
// which is why a late response has nothing stale to clobber.

use crate::client::{ApiClient, ClientError};
use cliniq_contracts::UserSession;
use cliniq_core::{AdminDashboard, DoctorDashboard, PatientDashboard};
use tracing::warn;

fn note(notices: &mut Vec<String>, collection: &str, err: ClientError) {
    warn!(collection, error = %err, "dashboard fetch failed");
    notices.push(format!("Failed to load {}", collection));
}

/// Admin view: doctors, patients, and appointments, fetched concurrently.
pub async fn load_admin_dashboard(client: &ApiClient) -> AdminDashboard {
    let (doctors, patients, appointments) = tokio::join!(
        client.list_doctors(),
        client.list_patients(),
        client.list_appointments(),
    );

    let mut dashboard = AdminDashboard::default();
    match doctors {
        Ok(list) => dashboard.doctors = list,
        Err(err) => note(&mut dashboard.notices, "doctors", err),
    }
    match patients {
        Ok(list) => dashboard.patients = list,
        Err(err) => note(&mut dashboard.notices, "patients", err),
    }
    match appointments {
        Ok(list) => dashboard.appointments = list,
        Err(err) => note(&mut dashboard.notices, "appointments", err),
    }
    dashboard
}

/// Doctor view: patient roster and the appointment book, concurrently;
/// appointments are narrowed to `selected_date` (default today).
pub async fn load_doctor_dashboard(
    client: &ApiClient,
    selected_date: Option<String>,
) -> DoctorDashboard {
    let selected_date =
        selected_date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let (patients, appointments) = tokio::join!(client.list_patients(), client.list_appointments());

    let mut dashboard = DoctorDashboard {
        selected_date,
        ..Default::default()
    };
    match patients {
        Ok(list) => dashboard.patients = list,
        Err(err) => note(&mut dashboard.notices, "patients", err),
    }
    match appointments {
        Ok(list) => dashboard.appointments = list,
        Err(err) => note(&mut dashboard.notices, "appointments", err),
    }
    dashboard
}

/// Patient view. Dependent sequence: locate the caller's own record first
/// (linked via `createdBy`), then narrow appointments to that record's id.
/// A missing profile is a notice and skips the appointment fetch.
pub async fn load_patient_dashboard(
    client: &ApiClient,
    session: &UserSession,
) -> PatientDashboard {
    let mut dashboard = PatientDashboard::default();

    let patients = match client.list_patients().await {
        Ok(list) => list,
        Err(err) => {
            note(&mut dashboard.notices, "patients", err);
            return dashboard;
        }
    };

    let profile = patients
        .into_iter()
        .find(|p| p.created_by.as_deref() == Some(session.id.as_str()));

    match profile {
        None => dashboard
            .notices
            .push("Patient profile not found".to_string()),
        Some(profile) => {
            let profile_id = profile.id.clone();
            dashboard.profile = Some(profile);

            match client.list_appointments().await {
                Ok(list) => {
                    dashboard.appointments = list
                        .into_iter()
                        .filter(|a| a.patient.id() == profile_id)
                        .collect();
                }
                Err(err) => note(&mut dashboard.notices, "appointments", err),
            }
        }
    }

    dashboard
}
