//! Logout command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, gateway: &Gateway) -> Result<()> {
    if !gateway.is_authenticated() {
        eprintln!("{}", "No active session.".dimmed());
        return Ok(());
    }

    gateway.logout();
    output::success("Logged out");

    Ok(())
}
