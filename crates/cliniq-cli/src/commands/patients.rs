// Patient record management. Doctors add patients (the record is linked
// back to them via createdBy); admins list, update, and delete.

use crate::output::{print_field, print_notices, print_table_header, print_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use cliniq_client::{ApiClient, ClientError};
use cliniq_contracts::{CreatePatientRequest, Role, UpdatePatientRequest};
use cliniq_core::{AdminDashboard, SessionStore};

#[derive(Subcommand)]
pub enum PatientsCommand {
    /// List patients, optionally filtered by name or gender
    List {
        #[arg(long, short, default_value = "")]
        search: String,
    },

    /// Show one patient record
    Show {
        /// Patient record id
        id: String,
    },

    /// Register a patient record (doctor)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        gender: String,

        #[arg(long)]
        contact: Option<String>,
    },

    /// Update a patient record (admin)
    Update {
        /// Patient record id
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        gender: String,

        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete a patient record (admin)
    Delete {
        /// Patient record id
        id: String,
    },
}

pub async fn run(
    command: PatientsCommand,
    client: &ApiClient,
    store: &dyn SessionStore,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        PatientsCommand::List { search } => {
            super::guard(store, Role::Admin)?;
            list(client, output, &search).await
        }
        PatientsCommand::Show { id } => {
            super::guard_any(store)?;
            show(client, output, &id).await
        }
        PatientsCommand::Add {
            name,
            age,
            gender,
            contact,
        } => {
            let session = super::guard(store, Role::Doctor)?;
            add(client, output, quiet, name, age, gender, contact, session.id).await
        }
        PatientsCommand::Update {
            id,
            name,
            age,
            gender,
            contact,
        } => {
            super::guard(store, Role::Admin)?;
            update(client, output, quiet, &id, name, age, gender, contact).await
        }
        PatientsCommand::Delete { id } => {
            super::guard(store, Role::Admin)?;
            delete(client, quiet, &id).await
        }
    }
}

async fn list(client: &ApiClient, output: OutputFormat, search: &str) -> Result<()> {
    let dashboard = AdminDashboard {
        patients: client.list_patients().await?,
        ..Default::default()
    };
    let patients = dashboard.filtered_patients(search);

    if output.is_text() {
        if patients.is_empty() {
            println!("No patients found");
            return Ok(());
        }
        print_table_header(&[("ID", 24), ("NAME", 24), ("AGE", 5), ("GENDER", 8)]);
        for patient in patients {
            print_table_row(&[
                (&patient.id, 24),
                (&patient.name, 24),
                (&patient.age.to_string(), 5),
                (&patient.gender, 8),
            ]);
        }
    } else {
        output.print_value(&dashboard.patients);
    }

    Ok(())
}

/// A missing record is a notice plus the list, never a hard failure.
async fn show(client: &ApiClient, output: OutputFormat, id: &str) -> Result<()> {
    let patient = match client.get_patient(id).await {
        Ok(patient) => patient,
        Err(ClientError::NotFound) => {
            print_notices(&[format!("Failed to fetch patient details: {} not found", id)]);
            return list(client, output, "").await;
        }
        Err(err) => return Err(err.into()),
    };

    if output.is_text() {
        print_field("ID", &patient.id);
        print_field("Name", &patient.name);
        print_field("Age", &patient.age.to_string());
        print_field("Gender", &patient.gender);
        print_field("Contact", patient.contact.as_deref().unwrap_or("-"));
    } else {
        output.print_value(&patient);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn add(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    name: String,
    age: u32,
    gender: String,
    contact: Option<String>,
    created_by: String,
) -> Result<()> {
    let request = CreatePatientRequest {
        name,
        age,
        gender: gender.to_lowercase(),
        contact,
        created_by: Some(created_by),
    };
    let patient = client.create_patient(&request).await?;

    if output.is_text() {
        if quiet {
            println!("{}", patient.id);
        } else {
            println!("Added patient: {}", patient.id);
            print_field("Name", &patient.name);
            print_field("Age", &patient.age.to_string());
        }
    } else {
        output.print_value(&patient);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn update(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    id: &str,
    name: String,
    age: u32,
    gender: String,
    contact: Option<String>,
) -> Result<()> {
    let request = UpdatePatientRequest {
        name,
        age,
        gender,
        contact,
    };
    let patient = client
        .update_patient(id, &request)
        .await
        .map_err(|err| match err {
            ClientError::NotFound => anyhow::anyhow!("Patient not found: {}", id),
            err => err.into(),
        })?;

    if output.is_text() {
        if !quiet {
            println!("Updated patient: {}", patient.id);
        }
    } else {
        output.print_value(&patient);
    }

    Ok(())
}

async fn delete(client: &ApiClient, quiet: bool, id: &str) -> Result<()> {
    client.delete_patient(id).await.map_err(|err| match err {
        ClientError::NotFound => anyhow::anyhow!("Patient not found: {}", id),
        err => err.into(),
    })?;

    if !quiet {
        println!("Deleted patient: {}", id);
    }
    Ok(())
}
