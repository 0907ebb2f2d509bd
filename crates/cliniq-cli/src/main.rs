// Cliniq CLI
//
// Design Decision: clap derive for argument parsing, text/json/yaml output
// for scripting, same shape as the rest of our tooling.
// Design Decision: the session lives in a JSON file; every command goes
// through the guard before touching the network.

mod commands;
mod output;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use cliniq_client::{ApiClient, FileSessionStore, UnauthorizedHandler};
use cliniq_core::SessionStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cliniq")]
#[command(about = "Cliniq CLI - clinic records for admins, doctors, and patients")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "CLINIQ_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Session file path (defaults to ~/.cliniq/session.json)
    #[arg(long, env = "CLINIQ_SESSION_FILE")]
    pub session_file: Option<std::path::PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and start a session
    Login {
        /// Account email
        #[arg(long, short)]
        email: String,

        /// Account password
        #[arg(long, short)]
        password: String,
    },

    /// Create an account and start a session
    Register {
        #[arg(long)]
        name: String,

        #[arg(long, short)]
        email: String,

        #[arg(long, short)]
        password: String,

        /// Account role (patient, doctor, admin, receptionist)
        #[arg(long, short, default_value = "patient")]
        role: String,

        /// Required when registering as a patient
        #[arg(long)]
        age: Option<u32>,

        /// Required when registering as a patient
        #[arg(long)]
        gender: Option<String>,

        /// Required when registering as a doctor
        #[arg(long)]
        specialization: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Render the dashboard for the logged-in role
    Dashboard {
        /// Appointment date filter for the doctor view (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Search filter applied to the listed collections
        #[arg(long, short, default_value = "")]
        search: String,

        /// Admin view tab
        #[arg(long, default_value = "overview", value_parser = ["overview", "doctors", "patients"])]
        tab: String,
    },

    /// Manage doctor records (admin)
    Doctors {
        #[command(subcommand)]
        command: commands::doctors::DoctorsCommand,
    },

    /// Manage patient records
    Patients {
        #[command(subcommand)]
        command: commands::patients::PatientsCommand,
    },

    /// View appointments
    Appointments {
        #[command(subcommand)]
        command: commands::appointments::AppointmentsCommand,
    },
}

/// The store is already cleared when this fires; all that is left is to
/// tell the user where to go.
struct NoticeOnUnauthorized;

impl UnauthorizedHandler for NoticeOnUnauthorized {
    fn on_unauthorized(&self) {
        eprintln!("Session expired or rejected. Please login again.");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store: Arc<dyn SessionStore> = Arc::new(match &cli.session_file {
        Some(path) => FileSessionStore::new(path),
        None => FileSessionStore::new(FileSessionStore::default_path()),
    });
    let client = ApiClient::new(&cli.api_url, store.clone())
        .with_unauthorized_handler(Arc::new(NoticeOnUnauthorized));
    let output = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&client, output, cli.quiet, &email, &password).await
        }
        Commands::Register {
            name,
            email,
            password,
            role,
            age,
            gender,
            specialization,
        } => {
            commands::auth::register(
                &client,
                output,
                cli.quiet,
                commands::auth::RegisterArgs {
                    name,
                    email,
                    password,
                    role,
                    age,
                    gender,
                    specialization,
                },
            )
            .await
        }
        Commands::Logout => commands::auth::logout(store.as_ref(), cli.quiet),
        Commands::Whoami => commands::auth::whoami(store.as_ref(), output),
        Commands::Dashboard { date, search, tab } => {
            commands::dashboard::run(&client, store.as_ref(), output, date, &search, &tab).await
        }
        Commands::Doctors { command } => {
            commands::doctors::run(command, &client, store.as_ref(), output, cli.quiet).await
        }
        Commands::Patients { command } => {
            commands::patients::run(command, &client, store.as_ref(), output, cli.quiet).await
        }
        Commands::Appointments { command } => {
            commands::appointments::run(command, &client, store.as_ref(), output).await
        }
    }
}
