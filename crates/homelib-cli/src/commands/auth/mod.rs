//! Auth subcommand implementations.

mod login;
mod logout;
mod refresh;
mod register;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use homelib_http::Gateway;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Create a new session (login)
    Login(login::LoginArgs),

    /// Register a new account
    Register(register::RegisterArgs),

    /// Discard the active session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Refresh the session tokens
    Refresh(refresh::RefreshArgs),
}

pub async fn handle(cmd: AuthCommand, gateway: &Gateway) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, gateway).await,
        AuthSubcommand::Register(args) => register::run(args, gateway).await,
        AuthSubcommand::Logout(args) => logout::run(args, gateway).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, gateway).await,
        AuthSubcommand::Refresh(args) => refresh::run(args, gateway).await,
    }
}
