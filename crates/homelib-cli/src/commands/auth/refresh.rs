//! Refresh command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(_args: RefreshArgs, gateway: &Gateway) -> Result<()> {
    eprintln!("{}", "Refreshing session...".dimmed());

    gateway.refresh_session().await.map_err(output::friendly)?;

    output::success("Session refreshed successfully");

    Ok(())
}
