// Login, registration, logout, and session inspection

use crate::output::{print_field, OutputFormat};
use anyhow::Result;
use cliniq_client::ApiClient;
use cliniq_contracts::{RegisterRequest, Role};
use cliniq_core::SessionStore;

pub struct RegisterArgs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub specialization: Option<String>,
}

pub async fn login(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    email: &str,
    password: &str,
) -> Result<()> {
    let outcome = cliniq_client::login(client, email, password).await?;

    if output.is_text() {
        if quiet {
            println!("{}", outcome.session.id);
        } else {
            println!(
                "Logged in as {} ({})",
                outcome.session.name, outcome.session.role
            );
            println!("Dashboard: {}", outcome.redirect);
        }
    } else {
        output.print_value(&outcome.session);
    }

    Ok(())
}

pub async fn register(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    args: RegisterArgs,
) -> Result<()> {
    let profile = RegisterRequest {
        name: args.name,
        email: args.email,
        password: args.password,
        role: Role::from(args.role.as_str()),
        age: args.age,
        gender: args.gender,
        specialization: args.specialization,
    };

    let outcome = cliniq_client::register(client, profile).await?;

    if output.is_text() {
        if quiet {
            println!("{}", outcome.session.id);
        } else {
            println!(
                "Registered {} as {}",
                outcome.session.email, outcome.session.role
            );
            println!("Dashboard: {}", outcome.redirect);
        }
    } else {
        output.print_value(&outcome.session);
    }

    Ok(())
}

pub fn logout(store: &dyn SessionStore, quiet: bool) -> Result<()> {
    let redirect = cliniq_client::logout(store);
    if !quiet {
        println!("Logged out. Next: {}", redirect);
    }
    Ok(())
}

pub fn whoami(store: &dyn SessionStore, output: OutputFormat) -> Result<()> {
    let session = super::guard_any(store)?;

    if output.is_text() {
        print_field("ID", &session.id);
        print_field("Name", &session.name);
        print_field("Email", &session.email);
        print_field("Role", session.role.as_str());
    } else {
        output.print_value(&session);
    }

    Ok(())
}
