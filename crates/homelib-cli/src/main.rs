//! homelib - CLI for a self-hosted home library server.
//!
//! This is a thin wrapper over the `homelib-http` client, intended for
//! driving a library server from the terminal and from scripts.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let gateway = commands::gateway(cli.api_url.as_deref())?;

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, &gateway).await,
        Commands::Library(cmd) => commands::library::handle(cmd, &gateway).await,
        Commands::Book(cmd) => commands::book::handle(cmd, &gateway).await,
        Commands::Comment(cmd) => commands::comment::handle(cmd, &gateway).await,
    }
}

// Logs go to stderr so structured output on stdout stays pipeable.
fn init_logging(verbosity: u8, json: bool) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
