//! Comment subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

use homelib_http::Gateway;

#[derive(Args, Debug)]
pub struct CommentCommand {
    #[command(subcommand)]
    pub command: CommentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CommentSubcommand {
    /// List comments on a book
    List(list::ListArgs),

    /// Fetch a single comment
    Get(get::GetArgs),

    /// Comment on a book
    Create(create::CreateArgs),

    /// Update a comment
    Update(update::UpdateArgs),

    /// Delete a comment
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: CommentCommand, gateway: &Gateway) -> Result<()> {
    match cmd.command {
        CommentSubcommand::List(args) => list::run(args, gateway).await,
        CommentSubcommand::Get(args) => get::run(args, gateway).await,
        CommentSubcommand::Create(args) => create::run(args, gateway).await,
        CommentSubcommand::Update(args) => update::run(args, gateway).await,
        CommentSubcommand::Delete(args) => delete::run(args, gateway).await,
    }
}
