//! Create comment command implementation.

use anyhow::Result;
use clap::Args;

use homelib_core::CommentRequest;
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub book: String,

    /// Comment text
    #[arg(long)]
    pub text: String,

    /// Star rating, 1 to 5
    #[arg(long)]
    pub rating: Option<i32>,
}

pub async fn run(args: CreateArgs, gateway: &Gateway) -> Result<()> {
    let request = CommentRequest {
        text: args.text,
        rating: args.rating,
    };

    let comment = gateway
        .create_comment(&args.library, &args.book, &request)
        .await
        .map_err(output::friendly)?;

    output::success("Comment added");
    output::field("Id", &comment.id);

    Ok(())
}
