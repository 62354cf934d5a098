//! Terminal output helpers.
//!
//! Human-readable output goes to stdout; progress hints are printed dimmed
//! to stderr at the call sites so `--json` output stays pipeable.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success line.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a `label: value` pair with the label dimmed.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Convert a client error into an anyhow error whose headline is the
/// user-presentable message, keeping the original error as the cause.
pub fn friendly(err: homelib_core::Error) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}
