//! List books command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_core::PageQuery;
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Library id
    pub library: String,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Page size
    #[arg(long)]
    pub size: Option<u32>,

    /// Sort expression, e.g. `title,asc`
    #[arg(long)]
    pub sort: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, gateway: &Gateway) -> Result<()> {
    let query = PageQuery {
        page: Some(args.page),
        size: args.size,
        sort: args.sort.clone(),
    };
    let page = gateway
        .list_books(&args.library, &query)
        .await
        .map_err(output::friendly)?;

    if args.json {
        return output::json_pretty(&page);
    }

    if page.content.is_empty() {
        eprintln!("{}", "No books found.".dimmed());
        return Ok(());
    }

    for book in &page.content {
        let author = book.author.as_deref().unwrap_or("unknown author");
        println!("{}  {} - {}", book.id.dimmed(), book.title, author);
    }

    eprintln!();
    eprintln!(
        "{}: {} of {} ({} total)",
        "Page".dimmed(),
        page.number + 1,
        page.total_pages,
        page.total_elements
    );

    Ok(())
}
