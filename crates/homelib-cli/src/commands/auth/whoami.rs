//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, gateway: &Gateway) -> Result<()> {
    let user = gateway
        .current_user()
        .context("No active session. Run 'homelib auth login' first.")?;

    if args.json {
        return output::json_pretty(&user);
    }

    output::field("User", &format!("{} {}", user.name, user.surname));
    output::field("Username", &user.username);
    output::field("Email", &user.email);
    output::field("Role", &user.role.to_string());
    output::field("API", gateway.base_url().as_str());

    Ok(())
}
