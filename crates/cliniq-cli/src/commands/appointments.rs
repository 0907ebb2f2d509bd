// Appointment listing. Any logged-in role may look at the book; the
// server decides what it actually returns.

use crate::output::{print_table_header, print_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use cliniq_client::ApiClient;
use cliniq_core::SessionStore;

#[derive(Subcommand)]
pub enum AppointmentsCommand {
    /// List appointments, optionally narrowed to one date
    List {
        /// Date filter (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

pub async fn run(
    command: AppointmentsCommand,
    client: &ApiClient,
    store: &dyn SessionStore,
    output: OutputFormat,
) -> Result<()> {
    super::guard_any(store)?;

    match command {
        AppointmentsCommand::List { date } => list(client, output, date).await,
    }
}

async fn list(client: &ApiClient, output: OutputFormat, date: Option<String>) -> Result<()> {
    let mut appointments = client.list_appointments().await?;
    if let Some(date) = date {
        appointments.retain(|a| a.date == date);
    }

    if output.is_text() {
        if appointments.is_empty() {
            println!("No appointments found");
            return Ok(());
        }
        print_table_header(&[("DATE", 12), ("TIME", 8), ("PATIENT", 24), ("STATUS", 10)]);
        for appointment in &appointments {
            print_table_row(&[
                (&appointment.date, 12),
                (&appointment.time, 8),
                (appointment.patient.name().unwrap_or(appointment.patient.id()), 24),
                (&appointment.status.to_string(), 10),
            ]);
        }
    } else {
        output.print_value(&appointments);
    }

    Ok(())
}
