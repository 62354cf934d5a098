//! Command implementations.

pub mod auth;
pub mod book;
pub mod comment;
pub mod library;

use anyhow::{Context, Result};
use tracing::debug;

use homelib_core::BaseUrl;
use homelib_http::{Gateway, open_default_store};

/// Default API base URL when neither `--api-url` nor the environment sets one.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable consulted for the API base URL.
const API_URL_ENV: &str = "HOMELIB_API_URL";

/// Build the gateway every command runs against, backed by the
/// on-disk session store.
pub fn gateway(api_url: Option<&str>) -> Result<Gateway> {
    let raw = match api_url {
        Some(url) => url.to_string(),
        None => std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
    };

    let base: BaseUrl = raw
        .parse()
        .with_context(|| format!("Invalid API URL: {raw}"))?;
    debug!(base = %base, "resolved API base URL");

    Ok(Gateway::builder(base).store(open_default_store()).build())
}
