// Dashboard rendering: the stored session's role picks exactly one view.

use crate::output::{print_field, print_notices, print_table_header, print_table_row, OutputFormat};
use anyhow::Result;
use cliniq_client::{
    load_admin_dashboard, load_doctor_dashboard, load_patient_dashboard, ApiClient,
};
use cliniq_contracts::UserSession;
use cliniq_core::{dashboard_for, AdminTab, DashboardKind, SessionStore};

pub async fn run(
    client: &ApiClient,
    store: &dyn SessionStore,
    output: OutputFormat,
    date: Option<String>,
    search: &str,
    tab: &str,
) -> Result<()> {
    let session = super::guard_any(store)?;

    let kind = dashboard_for(&session.role);
    match kind {
        DashboardKind::Admin => admin(client, output, search, AdminTab::parse(tab)).await,
        DashboardKind::Doctor => doctor(client, output, date, search).await,
        DashboardKind::Patient => patient(client, output, &session).await,
        DashboardKind::Receptionist => {
            println!("{}", kind.title());
            println!("No receptionist tools are available in this client.");
            Ok(())
        }
        DashboardKind::Unrecognized => {
            println!("{}", kind.title());
            Ok(())
        }
    }
}

async fn admin(
    client: &ApiClient,
    output: OutputFormat,
    search: &str,
    tab: AdminTab,
) -> Result<()> {
    let dashboard = load_admin_dashboard(client).await;

    if !output.is_text() {
        output.print_value(&dashboard);
        return Ok(());
    }

    println!("Admin Dashboard");
    print_notices(&dashboard.notices);

    let stats = dashboard.stats();
    print_field("Doctors", &stats.total_doctors.to_string());
    print_field("Patients", &stats.total_patients.to_string());
    print_field("Appointments", &stats.total_appointments.to_string());

    if matches!(tab, AdminTab::Overview | AdminTab::Doctors) {
        println!();
        print_table_header(&[("NAME", 24), ("EMAIL", 28), ("SPECIALIZATION", 20)]);
        for doctor in dashboard.filtered_doctors(search) {
            print_table_row(&[
                (&doctor.name, 24),
                (doctor.user_email().unwrap_or("-"), 28),
                (&doctor.specialization, 20),
            ]);
        }
    }

    if matches!(tab, AdminTab::Overview | AdminTab::Patients) {
        println!();
        print_table_header(&[("NAME", 24), ("AGE", 5), ("GENDER", 8), ("CONTACT", 16)]);
        for patient in dashboard.filtered_patients(search) {
            print_table_row(&[
                (&patient.name, 24),
                (&patient.age.to_string(), 5),
                (&patient.gender, 8),
                (patient.contact.as_deref().unwrap_or("-"), 16),
            ]);
        }
    }

    Ok(())
}

async fn doctor(
    client: &ApiClient,
    output: OutputFormat,
    date: Option<String>,
    search: &str,
) -> Result<()> {
    let dashboard = load_doctor_dashboard(client, date).await;

    if !output.is_text() {
        output.print_value(&dashboard);
        return Ok(());
    }

    println!("Doctor Dashboard ({})", dashboard.selected_date);
    print_notices(&dashboard.notices);

    let stats = dashboard.stats();
    print_field("Patients", &stats.total_patients.to_string());
    print_field("Today", &stats.todays_appointments.to_string());

    println!();
    print_table_header(&[("PATIENT", 24), ("TIME", 8), ("STATUS", 10)]);
    for appointment in dashboard.todays_appointments() {
        print_table_row(&[
            (appointment.patient.name().unwrap_or(appointment.patient.id()), 24),
            (&appointment.time, 8),
            (&appointment.status.to_string(), 10),
        ]);
    }

    println!();
    print_table_header(&[("NAME", 24), ("AGE", 5), ("GENDER", 8), ("CONTACT", 16)]);
    for patient in dashboard.filtered_patients(search) {
        print_table_row(&[
            (&patient.name, 24),
            (&patient.age.to_string(), 5),
            (&patient.gender, 8),
            (patient.contact.as_deref().unwrap_or("-"), 16),
        ]);
    }

    Ok(())
}

async fn patient(client: &ApiClient, output: OutputFormat, session: &UserSession) -> Result<()> {
    let dashboard = load_patient_dashboard(client, session).await;

    if !output.is_text() {
        output.print_value(&dashboard);
        return Ok(());
    }

    println!("Patient Dashboard");
    print_notices(&dashboard.notices);

    if let Some(profile) = &dashboard.profile {
        print_field("Name", &profile.name);
        print_field("Age", &profile.age.to_string());
        print_field("Gender", &profile.gender);
        print_field("Contact", profile.contact.as_deref().unwrap_or("-"));
    }

    println!();
    println!("Upcoming appointments:");
    print_table_header(&[("DATE", 12), ("TIME", 8), ("DOCTOR", 24), ("STATUS", 10)]);
    for appointment in dashboard.upcoming_appointments() {
        let doctor = appointment
            .doctor
            .as_ref()
            .map(|d| d.name().unwrap_or(d.id()))
            .unwrap_or("-");
        print_table_row(&[
            (&appointment.date, 12),
            (&appointment.time, 8),
            (doctor, 24),
            (&appointment.status.to_string(), 10),
        ]);
    }

    Ok(())
}
