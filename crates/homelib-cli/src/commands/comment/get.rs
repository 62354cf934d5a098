//! Get comment command implementation.

use anyhow::Result;
use clap::Args;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub book: String,

    /// Comment id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, gateway: &Gateway) -> Result<()> {
    let comment = gateway
        .get_comment(&args.library, &args.book, &args.id)
        .await
        .map_err(output::friendly)?;

    if args.json {
        return output::json_pretty(&comment);
    }

    output::field("Text", &comment.text);
    if let Some(rating) = comment.rating {
        output::field("Rating", &format!("{}/5", rating));
    }
    if let Some(user) = &comment.user {
        output::field("By", &user.username);
    }
    if let Some(created_at) = &comment.created_at {
        output::field("Created", &created_at.to_rfc3339());
    }

    Ok(())
}
