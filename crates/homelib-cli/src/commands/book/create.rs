//! Create book command implementation.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use homelib_core::BookRequest;
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Library id
    pub library: String,

    /// Book title
    #[arg(long)]
    pub title: String,

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

pub async fn run(args: CreateArgs, gateway: &Gateway) -> Result<()> {
    let request = BookRequest {
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

    eprintln!("{}", "Adding book...".dimmed());

    let book = gateway
        .create_book(&args.library, &request)
        .await
        .map_err(output::friendly)?;

    output::success(&format!("Added book: {}", book.title));
    output::field("Id", &book.id);

    Ok(())
}
