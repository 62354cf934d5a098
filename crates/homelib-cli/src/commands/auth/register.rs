//! Register command implementation.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use homelib_core::RegistrationRequest;
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// First name
    #[arg(long)]
    pub name: String,

    /// Last name
    #[arg(long)]
    pub surname: String,

    /// Unique username
    #[arg(long)]
    pub username: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,

    /// Date of birth (yyyy-mm-dd)
    #[arg(long)]
    pub date_of_birth: NaiveDate,
}

pub async fn run(args: RegisterArgs, gateway: &Gateway) -> Result<()> {
    let request = RegistrationRequest {
        name: args.name,
        surname: args.surname,
        username: args.username,
        email: args.email,
        password: args.password,
        date_of_birth: args.date_of_birth,
    };

    eprintln!("{}", "Registering account...".dimmed());

    let user = gateway
        .register(&request)
        .await
        .map_err(output::friendly)?;

    output::success("Account registered");
    println!();
    output::field("User", &format!("{} {}", user.name, user.surname));
    output::field("Username", &user.username);
    eprintln!();
    eprintln!(
        "{}",
        "Run 'homelib auth login' to start a session.".dimmed()
    );

    Ok(())
}
