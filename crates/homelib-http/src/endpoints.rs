//! REST endpoint definitions and auth wire types.

use homelib_core::model::User;
use serde::{Deserialize, Serialize};

/// Create a session from credentials.
pub const LOGIN: &str = "/auth/login";

/// Register a new account.
pub const REGISTER: &str = "/auth/register";

/// Exchange a refresh token for a new token pair.
pub const REFRESH: &str = "/auth/refresh";

/// Library collection root.
pub const LIBRARIES: &str = "/v1/library";

/// Unpaginated library listing.
pub const ALL_LIBRARIES: &str = "/v1/library/all";

/// Endpoints exempt from credential injection and from expiry recovery.
///
/// Keeping `/auth/refresh` in this list is what prevents a failed refresh
/// from recursing into another recovery round.
const PUBLIC_ENDPOINTS: &[&str] = &[LOGIN, REGISTER, REFRESH];

/// Whether an endpoint is public (no token attached, 401 never recovers).
///
/// Matched by containment, not equality, so query strings and prefixes
/// cannot defeat the classification.
pub fn is_public_endpoint(endpoint: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|public| endpoint.contains(public))
}

/// Path of a single library.
pub fn library(id: &str) -> String {
    format!("{LIBRARIES}/{id}")
}

/// Path of a library's book collection.
pub fn books(library_id: &str) -> String {
    format!("{LIBRARIES}/{library_id}/books")
}

/// Path of a single book.
pub fn book(library_id: &str, book_id: &str) -> String {
    format!("{LIBRARIES}/{library_id}/books/{book_id}")
}

/// Path of a book's comment collection.
pub fn comments(library_id: &str, book_id: &str) -> String {
    format!("{LIBRARIES}/{library_id}/books/{book_id}/comments")
}

/// Path of a single comment.
pub fn comment(library_id: &str, book_id: &str, comment_id: &str) -> String {
    format!("{LIBRARIES}/{library_id}/books/{book_id}/comments/{comment_id}")
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload of a successful login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds. The identity provider serializes
    /// this as a decimal string; informational only, the client reacts
    /// to 401s.
    #[serde(default)]
    pub expires_in: Option<String>,
    pub user: User,
}

/// Refresh request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Payload of a successful token refresh.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshData {
    pub access_token: String,
    /// Rotated refresh token; absent when the server does not rotate.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds, as a decimal string.
    #[serde(default)]
    pub expires_in: Option<String>,
}

/// Comment creation body; the service wants the book id in the body as
/// well as the path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentBody<'a> {
    pub book_id: &'a str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_are_public() {
        assert!(is_public_endpoint("/auth/login"));
        assert!(is_public_endpoint("/auth/register"));
        assert!(is_public_endpoint("/auth/refresh"));
    }

    #[test]
    fn containment_survives_query_strings() {
        assert!(is_public_endpoint("/auth/login?redirect=%2Fhome"));
        assert!(is_public_endpoint("/api/auth/refresh"));
    }

    #[test]
    fn resource_endpoints_are_protected() {
        assert!(!is_public_endpoint(LIBRARIES));
        assert!(!is_public_endpoint(ALL_LIBRARIES));
        assert!(!is_public_endpoint(&book("l1", "b1")));
    }

    #[test]
    fn nested_paths() {
        assert_eq!(library("l1"), "/v1/library/l1");
        assert_eq!(books("l1"), "/v1/library/l1/books");
        assert_eq!(book("l1", "b2"), "/v1/library/l1/books/b2");
        assert_eq!(comments("l1", "b2"), "/v1/library/l1/books/b2/comments");
        assert_eq!(
            comment("l1", "b2", "c3"),
            "/v1/library/l1/books/b2/comments/c3"
        );
    }
}
