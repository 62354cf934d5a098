//! Update book command implementation.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use homelib_core::BookUpdateRequest;
use homelib_http::Gateway;

use crate::output;

/// Sends only the flags that were given; everything else is left
/// unchanged on the server.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub id: String,

    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Author
    #[arg(long)]
    pub author: Option<String>,

    /// ISBN
    #[arg(long)]
    pub isbn: Option<String>,

    /// Release date (yyyy-mm-dd)
    #[arg(long)]
    pub release_date: Option<NaiveDate>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Language
    #[arg(long)]
    pub language: Option<String>,

    /// Page count
    #[arg(long)]
    pub pages: Option<i32>,

    /// Publisher
    #[arg(long)]
    pub publisher: Option<String>,

    /// Genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub cover_image_url: Option<String>,
}

pub async fn run(args: UpdateArgs, gateway: &Gateway) -> Result<()> {
    let request = BookUpdateRequest {
        title: args.title,
        author: args.author,
        isbn: args.isbn,
        release_date: args.release_date,
        description: args.description,
        language: args.language,
        pages: args.pages,
        publisher: args.publisher,
        genre: args.genre,
        cover_image_url: args.cover_image_url,
    };

    let detail = gateway
        .update_book(&args.library, &args.id, &request)
        .await
        .map_err(output::friendly)?;

    output::success(&format!("Updated book: {}", detail.book.title));

    Ok(())
}
