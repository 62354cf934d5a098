//! CLI integration tests against a mock service.
//!
//! Every invocation gets an isolated HOME and XDG_DATA_HOME so session
//! files cannot leak between tests or into the developer's real data
//! directory. Tests that spawn the binary while a mock server is live
//! use the multi-threaded runtime, because `Command::output` blocks the
//! calling thread.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with arguments, an isolated home and an API URL.
fn run_cli(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_homelib"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("HOMELIB_API_URL", api_url);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli(args, home, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
fn run_cli_failure(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli(args, home, api_url);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "u1",
        "name": "Alice",
        "surname": "Novak",
        "username": "alice",
        "email": "alice@example.com",
        "dateOfBirth": "1990-04-12",
        "role": "MEMBER"
    })
}

fn library_json() -> serde_json::Value {
    json!({
        "id": "lib1",
        "title": "Sci-fi",
        "privacyStatus": "PRIVATE",
        "isEditable": true
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn login_whoami_logout_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {
                "token": "access-1",
                "refreshToken": "refresh-1",
                "expiresIn": "3600",
                "user": user_json()
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = server.uri();

    let stdout = run_cli_success(
        &[
            "auth",
            "login",
            "--email",
            "alice@example.com",
            "--password",
            "secret123",
        ],
        home.path(),
        &api,
    );
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains("alice"));

    // A separate process reads the persisted session without any request
    let stdout = run_cli_success(&["auth", "whoami"], home.path(), &api);
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("MEMBER"));

    let stdout = run_cli_success(&["auth", "logout"], home.path(), &api);
    assert!(stdout.contains("Logged out"));

    // Session gone
    let stderr = run_cli_failure(&["auth", "whoami"], home.path(), &api);
    assert!(
        stderr.contains("No active session"),
        "Expected 'no session' error, got: {}",
        stderr
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn login_failure_prints_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "Error",
            "data": {"title": "Invalid email or password"}
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(
        &[
            "auth",
            "login",
            "--email",
            "alice@example.com",
            "--password",
            "wrong",
        ],
        home.path(),
        &server.uri(),
    );
    assert!(
        stderr.contains("Invalid email or password"),
        "Expected server message, got: {}",
        stderr
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_session_refreshes_and_persists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {
                "token": "stale-access",
                "refreshToken": "refresh-1",
                "user": user_json()
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/library/all"))
        .and(header("authorization", "Bearer stale-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "Error",
            "data": {"title": "Token expired"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {
                "accessToken": "fresh-access",
                "refreshToken": "refresh-2",
                "expiresIn": "3600"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/library/all"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": [library_json()]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = server.uri();

    run_cli_success(
        &[
            "auth",
            "login",
            "--email",
            "alice@example.com",
            "--password",
            "secret123",
        ],
        home.path(),
        &api,
    );

    // First listing hits a 401, refreshes, and replays
    let stdout = run_cli_success(&["library", "list", "--all"], home.path(), &api);
    assert!(stdout.contains("Sci-fi"));

    // The rotated tokens were persisted: a fresh process needs no refresh
    let stdout = run_cli_success(&["library", "list", "--all"], home.path(), &api);
    assert!(stdout.contains("Sci-fi"));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_confirms_with_phrased_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {
                "token": "access-1",
                "refreshToken": "refresh-1",
                "user": user_json()
            }
        })))
        .mount(&server)
        .await;
    // The service answers a delete with the removed entity's id
    Mock::given(method("DELETE"))
        .and(path("/v1/library/lib1"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": "lib1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = server.uri();

    run_cli_success(
        &[
            "auth",
            "login",
            "--email",
            "alice@example.com",
            "--password",
            "secret123",
        ],
        home.path(),
        &api,
    );

    let stdout = run_cli_success(&["library", "delete", "lib1"], home.path(), &api);
    assert!(
        stdout.contains("Deleted library lib1"),
        "Expected a phrased confirmation, got: {}",
        stdout
    );
}

#[test]
fn whoami_without_session_fails() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(
        &["auth", "whoami"],
        home.path(),
        "http://localhost:8080",
    );
    assert!(
        stderr.contains("No active session"),
        "Expected 'no session' error, got: {}",
        stderr
    );
}

#[test]
fn rejects_invalid_api_url() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(
        &["auth", "whoami", "--api-url", "not a url"],
        home.path(),
        "http://localhost:8080",
    );
    assert!(
        stderr.contains("Invalid API URL"),
        "Expected URL error, got: {}",
        stderr
    );
}
