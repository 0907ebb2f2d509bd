// Doctor record management (admin only)

use crate::output::{print_field, print_notices, print_table_header, print_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use cliniq_client::{ApiClient, ClientError};
use cliniq_contracts::{CreateDoctorRequest, Role, UpdateDoctorRequest};
use cliniq_core::{AdminDashboard, SessionStore};

#[derive(Subcommand)]
pub enum DoctorsCommand {
    /// List doctors, optionally filtered by name or specialization
    List {
        #[arg(long, short, default_value = "")]
        search: String,
    },

    /// Show one doctor record
    Show {
        /// Doctor record id
        id: String,
    },

    /// Register a doctor record for an existing user account
    Add {
        #[arg(long)]
        name: String,

        /// Linked user account id
        #[arg(long)]
        user: String,

        #[arg(long)]
        specialization: String,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Update a doctor record
    Update {
        /// Doctor record id
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        specialization: String,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Delete a doctor record
    Delete {
        /// Doctor record id
        id: String,
    },
}

pub async fn run(
    command: DoctorsCommand,
    client: &ApiClient,
    store: &dyn SessionStore,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    super::guard(store, Role::Admin)?;

    match command {
        DoctorsCommand::List { search } => list(client, output, &search).await,
        DoctorsCommand::Show { id } => show(client, output, &id).await,
        DoctorsCommand::Add {
            name,
            user,
            specialization,
            bio,
        } => add(client, output, quiet, name, user, specialization, bio).await,
        DoctorsCommand::Update {
            id,
            name,
            specialization,
            bio,
        } => update(client, output, quiet, &id, name, specialization, bio).await,
        DoctorsCommand::Delete { id } => delete(client, quiet, &id).await,
    }
}

async fn list(client: &ApiClient, output: OutputFormat, search: &str) -> Result<()> {
    let dashboard = AdminDashboard {
        doctors: client.list_doctors().await?,
        ..Default::default()
    };
    let doctors = dashboard.filtered_doctors(search);

    if output.is_text() {
        if doctors.is_empty() {
            println!("No doctors found");
            return Ok(());
        }
        print_table_header(&[("ID", 24), ("NAME", 24), ("SPECIALIZATION", 20)]);
        for doctor in doctors {
            print_table_row(&[(&doctor.id, 24), (&doctor.name, 24), (&doctor.specialization, 20)]);
        }
    } else {
        output.print_value(&dashboard.doctors);
    }

    Ok(())
}

/// A missing record is a notice plus the list, never a hard failure.
async fn show(client: &ApiClient, output: OutputFormat, id: &str) -> Result<()> {
    let doctor = match client.get_doctor(id).await {
        Ok(doctor) => doctor,
        Err(ClientError::NotFound) => {
            print_notices(&[format!("Failed to fetch doctor details: {} not found", id)]);
            return list(client, output, "").await;
        }
        Err(err) => return Err(err.into()),
    };

    if output.is_text() {
        print_field("ID", &doctor.id);
        print_field("Name", &doctor.name);
        print_field("Specialization", &doctor.specialization);
        print_field("Email", doctor.user_email().unwrap_or("-"));
        if let Some(bio) = &doctor.bio {
            print_field("Bio", bio);
        }
    } else {
        output.print_value(&doctor);
    }

    Ok(())
}

async fn add(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    name: String,
    user: String,
    specialization: String,
    bio: Option<String>,
) -> Result<()> {
    let request = CreateDoctorRequest {
        name,
        user_id: user,
        specialization,
        bio,
    };
    let doctor = client.create_doctor(&request).await?;

    if output.is_text() {
        if quiet {
            println!("{}", doctor.id);
        } else {
            println!("Added doctor: {}", doctor.id);
            print_field("Name", &doctor.name);
            print_field("Specialization", &doctor.specialization);
        }
    } else {
        output.print_value(&doctor);
    }

    Ok(())
}

async fn update(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    id: &str,
    name: String,
    specialization: String,
    bio: Option<String>,
) -> Result<()> {
    let request = UpdateDoctorRequest {
        name,
        specialization,
        bio,
    };
    let doctor = client
        .update_doctor(id, &request)
        .await
        .map_err(|err| match err {
            ClientError::NotFound => anyhow::anyhow!("Doctor not found: {}", id),
            err => err.into(),
        })?;

    if output.is_text() {
        if !quiet {
            println!("Updated doctor: {}", doctor.id);
        }
    } else {
        output.print_value(&doctor);
    }

    Ok(())
}

async fn delete(client: &ApiClient, quiet: bool, id: &str) -> Result<()> {
    client.delete_doctor(id).await.map_err(|err| match err {
        ClientError::NotFound => anyhow::anyhow!("Doctor not found: {}", id),
        err => err.into(),
    })?;

    if !quiet {
        println!("Deleted doctor: {}", id);
    }
    Ok(())
}
