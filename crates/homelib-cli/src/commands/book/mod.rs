//! Book subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

use homelib_http::Gateway;

#[derive(Args, Debug)]
pub struct BookCommand {
    #[command(subcommand)]
    pub command: BookSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BookSubcommand {
    /// List books in a library
    List(list::ListArgs),

    /// Fetch a single book with its comments
    Get(get::GetArgs),

    /// Add a book to a library
    Create(create::CreateArgs),

    /// Update a book's fields
    Update(update::UpdateArgs),

    /// Delete a book
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: BookCommand, gateway: &Gateway) -> Result<()> {
    match cmd.command {
        BookSubcommand::List(args) => list::run(args, gateway).await,
        BookSubcommand::Get(args) => get::run(args, gateway).await,
        BookSubcommand::Create(args) => create::run(args, gateway).await,
        BookSubcommand::Update(args) => update::run(args, gateway).await,
        BookSubcommand::Delete(args) => delete::run(args, gateway).await,
    }
}
