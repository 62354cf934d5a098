//! Update comment command implementation.

use anyhow::Result;
use clap::Args;

use homelib_core::CommentRequest;
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub book: String,

    /// Comment id
    pub id: String,

    /// Comment text
    #[arg(long)]
    pub text: String,

    /// Star rating, 1 to 5
    #[arg(long)]
    pub rating: Option<i32>,
}

pub async fn run(args: UpdateArgs, gateway: &Gateway) -> Result<()> {
    let request = CommentRequest {
        text: args.text,
        rating: args.rating,
    };

    gateway
        .update_comment(&args.library, &args.book, &args.id, &request)
        .await
        .map_err(output::friendly)?;

    output::success("Comment updated");

    Ok(())
}
