//! Embeds the git version into the binary at compile time.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = git_describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=HOMELIB_VERSION={version}");
}

/// `git describe --tags --always`, with any leading `v` stripped.
///
/// Returns `None` outside a git checkout, e.g. when building from a crates.io
/// tarball, in which case the cargo package version is used instead.
fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8(output.stdout).ok()?;
    let described = raw.trim();
    let version = described.strip_prefix('v').unwrap_or(described);
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}
