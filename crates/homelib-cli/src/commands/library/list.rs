//! List libraries command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use homelib_core::{Library, PageQuery};
use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Fetch every visible library instead of one page
    #[arg(long)]
    pub all: bool,

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
    if args.all {
        let libraries = gateway
            .list_all_libraries()
            .await
            .map_err(output::friendly)?;

        if args.json {
            return output::json_pretty(&libraries);
        }
        print_libraries(&libraries);
        return Ok(());
    }

    let query = PageQuery {
        page: Some(args.page),
        size: args.size,
        sort: args.sort.clone(),
    };
    let page = gateway
        .list_libraries(&query)
        .await
        .map_err(output::friendly)?;

    if args.json {
        return output::json_pretty(&page);
    }

    print_libraries(&page.content);
    if !page.empty {
        eprintln!();
        eprintln!(
            "{}: {} of {} ({} total)",
            "Page".dimmed(),
            page.number + 1,
            page.total_pages,
            page.total_elements
        );
    }

    Ok(())
}

fn print_libraries(libraries: &[Library]) {
    if libraries.is_empty() {
        eprintln!("{}", "No libraries found.".dimmed());
        return;
    }

    for library in libraries {
        println!(
            "{}  {}  {}",
            library.id.dimmed(),
            library.title,
            format!("[{}]", library.privacy_status).dimmed()
        );
    }
}
