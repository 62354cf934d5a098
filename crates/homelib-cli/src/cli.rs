//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::book::BookCommand;
use crate::commands::comment::CommentCommand;
use crate::commands::library::LibraryCommand;

/// CLI for a self-hosted home library server.
#[derive(Parser, Debug)]
#[command(name = "homelib")]
#[command(author, version = env!("HOMELIB_VERSION"), about, long_about = None)]
pub struct Cli {
    /// API base URL (overrides HOMELIB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session operations
    Auth(AuthCommand),

    /// Manage libraries
    Library(LibraryCommand),

    /// Manage books within a library
    Book(BookCommand),

    /// Manage comments on a book
    Comment(CommentCommand),
}
