//! Get library command implementation.

use anyhow::Result;
use clap::Args;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Library id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, gateway: &Gateway) -> Result<()> {
    let library = gateway
        .get_library(&args.id)
        .await
        .map_err(output::friendly)?;

    if args.json {
        return output::json_pretty(&library);
    }

    output::field("Title", &library.title);
    if let Some(description) = &library.description {
        output::field("Description", description);
    }
    output::field("Privacy", &library.privacy_status.to_string());
    output::field("Editable", if library.is_editable { "yes" } else { "no" });
    if let Some(color) = &library.color {
        output::field("Color", color);
    }
    if let Some(creator) = &library.creator {
        output::field("Creator", &creator.username);
    }
    if let Some(created_at) = &library.created_at {
        output::field("Created", &created_at.to_rfc3339());
    }

    Ok(())
}
