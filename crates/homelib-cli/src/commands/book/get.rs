//! Get book command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, gateway: &Gateway) -> Result<()> {
    let detail = gateway
        .get_book(&args.library, &args.id)
        .await
        .map_err(output::friendly)?;

    if args.json {
        return output::json_pretty(&detail);
    }

    let book = &detail.book;
    output::field("Title", &book.title);
    if let Some(author) = &book.author {
        output::field("Author", author);
    }
    if let Some(isbn) = &book.isbn {
        output::field("ISBN", isbn);
    }
    if let Some(release_date) = &book.release_date {
        output::field("Released", &release_date.to_string());
    }
    if let Some(language) = &book.language {
        output::field("Language", language);
    }
    if let Some(pages) = book.pages {
        output::field("Pages", &pages.to_string());
    }
    if let Some(publisher) = &book.publisher {
        output::field("Publisher", publisher);
    }
    if let Some(genre) = &book.genre {
        output::field("Genre", genre);
    }
    if let Some(description) = &book.description {
        println!();
        println!("{}", description);
    }

    if !detail.comments.is_empty() {
        println!();
        println!("{}", format!("Comments ({})", detail.comments.len()).dimmed());
        for comment in &detail.comments {
            let stars = match comment.rating {
                Some(rating) => format!("{}/5 ", rating),
                None => String::new(),
            };
            let who = comment
                .user
                .as_ref()
                .map(|user| user.username.as_str())
                .unwrap_or("anonymous");
            println!("  {}{} - {}", stars, comment.text, who.dimmed());
        }
    }

    Ok(())
}
