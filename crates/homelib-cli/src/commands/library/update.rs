//! Update library command implementation.

use anyhow::Result;
use clap::Args;

use homelib_core::{LibraryRequest, PrivacyStatus};
use homelib_http::Gateway;

use crate::output;

/// Replaces the library's fields wholesale, matching the service's PUT
/// semantics. Flags left out fall back to their defaults.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Library id
    pub id: String,

    /// Library title
    #[arg(long)]
    pub title: String,

    /// Library description
    #[arg(long)]
    pub description: Option<String>,

    /// Display color as a hex string
    #[arg(long)]
    pub color: Option<String>,

    /// Make the library private (default: public)
    #[arg(long)]
    pub private: bool,

    /// Allow other users to add books
    #[arg(long)]
    pub editable: bool,
}

pub async fn run(args: UpdateArgs, gateway: &Gateway) -> Result<()> {
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

    let library = gateway
        .update_library(&args.id, &request)
        .await
        .map_err(output::friendly)?;

    output::success(&format!("Updated library: {}", library.title));

    Ok(())
}
