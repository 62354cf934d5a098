//! Library subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

use homelib_http::Gateway;

#[derive(Args, Debug)]
pub struct LibraryCommand {
    #[command(subcommand)]
    pub command: LibrarySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LibrarySubcommand {
    /// List libraries
    List(list::ListArgs),

    /// Fetch a single library
    Get(get::GetArgs),

    /// Create a new library
    Create(create::CreateArgs),

    /// Replace a library's fields
    Update(update::UpdateArgs),

    /// Delete a library
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: LibraryCommand, gateway: &Gateway) -> Result<()> {
    match cmd.command {
        LibrarySubcommand::List(args) => list::run(args, gateway).await,
        LibrarySubcommand::Get(args) => get::run(args, gateway).await,
        LibrarySubcommand::Create(args) => create::run(args, gateway).await,
        LibrarySubcommand::Update(args) => update::run(args, gateway).await,
        LibrarySubcommand::Delete(args) => delete::run(args, gateway).await,
    }
}
