//! Create library command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_core::{LibraryRequest, PrivacyStatus};
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Library title
    #[arg(long)]
    pub title: String,

    /// Library description
    #[arg(long)]
    pub description: Option<String>,

    /// Display color as a hex string, e.g. `#A3C9F1`
    #[arg(long)]
    pub color: Option<String>,

    /// Make the library private (default: public)
    #[arg(long)]
    pub private: bool,

    /// Allow other users to add books
    #[arg(long)]
    pub editable: bool,
}

pub async fn run(args: CreateArgs, gateway: &Gateway) -> Result<()> {
    let request = LibraryRequest {
        title: args.title,
        description: args.description,
        color: args.color,
        privacy_status: if args.private {
            PrivacyStatus::Private
        } else {
            PrivacyStatus::Public
        },
        is_editable: args.editable,
    };

    eprintln!("{}", "Creating library...".dimmed());

    let library = gateway
        .create_library(&request)
        .await
        .map_err(output::friendly)?;

    output::success(&format!("Created library: {}", library.title));
    output::field("Id", &library.id);

    Ok(())
}
