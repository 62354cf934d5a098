//! List comments command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub book: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, gateway: &Gateway) -> Result<()> {
    let comments = gateway
        .list_comments(&args.library, &args.book)
        .await
        .map_err(output::friendly)?;

    if args.json {
        return output::json_pretty(&comments);
    }

    if comments.is_empty() {
        eprintln!("{}", "No comments found.".dimmed());
        return Ok(());
    }

    for comment in &comments {
        let stars = match comment.rating {
            Some(rating) => format!("{}/5 ", rating),
            None => String::new(),
        };
        let who = comment
            .user
            .as_ref()
            .map(|user| user.username.as_str())
            .unwrap_or("anonymous");
        println!("{}  {}{} - {}", comment.id.dimmed(), stars, comment.text, who.dimmed());
    }

    Ok(())
}
