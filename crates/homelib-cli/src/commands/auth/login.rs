//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_core::Credentials;
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, gateway: &Gateway) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let user = gateway
        .login(&credentials)
        .await
        .map_err(output::friendly)?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &format!("{} {}", user.name, user.surname));
    output::field("Username", &user.username);
    output::field("Role", &user.role.to_string());
    output::field("API", gateway.base_url().as_str());

    Ok(())
}
