//! Error types for the homelib client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, and input validation errors, plus the
//! fixed user-presentable messages the service front ends show for each
//! failure class.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message when an error response carries no usable text.
const DEFAULT_API_MESSAGE: &str = "An error occurred";

/// The unified error type for homelib operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (expired session, missing refresh token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Errors reported by the service in an error envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid base URL, unencodable body).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// The fixed, user-presentable message for this error.
    ///
    /// Transport failures and terminal session expiry map to constant
    /// strings; API errors defer to [`ApiError::user_message`].
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport(TransportError::Connection { .. }) => {
                "Unable to connect to server. Please check your internet connection.".to_string()
            }
            Error::Transport(TransportError::Timeout { .. }) => {
                "Request timeout. Please try again.".to_string()
            }
            Error::Transport(TransportError::Http { message }) => message.clone(),
            Error::Auth(AuthError::SessionExpired) => {
                "Session expired. Please login again.".to_string()
            }
            Error::Auth(err) => err.to_string(),
            Error::Api(err) => err.user_message(),
            Error::InvalidInput(err) => err.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error, including undecodable response bodies.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The session could not be recovered and was evicted.
    #[error("session expired")]
    SessionExpired,

    /// An explicit refresh was requested but no refresh token is stored.
    #[error("no refresh token available")]
    MissingRefreshToken,
}

/// A field-level validation failure reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the rejected field.
    pub field: String,
    /// Reason the field was rejected.
    pub message: String,
}

/// An error reported by the service in a response body.
///
/// The service has produced several envelope shapes over time; all of them
/// are folded into this one struct by [`ApiError::from_body`].
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Best available error message (never empty).
    pub message: String,
    /// Machine-readable error code (if present).
    pub code: Option<String>,
    /// Longer description (if present).
    pub details: Option<String>,
    /// Field-level validation failures (empty when none were reported).
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error envelope shapes the service is known to produce, parsed leniently.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
    error: Option<ErrorInfo>,
    data: Option<ErrorData>,
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    code: String,
    message: String,
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorData {
    title: Option<String>,
    details: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Create a new API error with just a status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
            details: None,
            errors: Vec::new(),
        }
    }

    /// Derive an API error from a response body.
    ///
    /// Fields are taken in priority order: the `data` envelope
    /// (`data.title`, `data.details`, `data.errors`), then the `error`
    /// object (`code`, `message`, `details`), then the flat `message`,
    /// `errors` and `details` fields. An unparseable body yields the
    /// default message with just the status.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

        let mut err = Self {
            status,
            message: String::new(),
            code: None,
            details: None,
            errors: Vec::new(),
        };

        if let Some(data) = parsed.data {
            if let Some(title) = data.title {
                err.message = title;
            }
            if let Some(details) = data.details {
                if err.message.is_empty() {
                    err.message = details.clone();
                }
                err.details = Some(details);
            }
            if let Some(errors) = data.errors {
                err.errors = errors;
            }
        }

        if let Some(info) = parsed.error {
            err.code = Some(info.code);
            if err.message.is_empty() {
                err.message = info.message;
            }
            if err.details.is_none() {
                err.details = info.details;
            }
        }

        if err.message.is_empty() {
            if let Some(message) = parsed.message {
                err.message = message;
            }
        }
        if err.errors.is_empty() {
            if let Some(errors) = parsed.errors {
                err.errors = errors;
            }
        }
        if err.details.is_none() {
            err.details = parsed.details;
        }
        if err.message.is_empty() {
            err.message = DEFAULT_API_MESSAGE.to_string();
        }

        err
    }

    /// Check if this is an authentication (401) error.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if this is an authorization (403) error.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Check if this is a validation (400) error.
    pub fn is_validation(&self) -> bool {
        self.status == 400
    }

    /// Check if this is a not-found (404) error.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// The user-presentable message for this error.
    ///
    /// Field errors render one per line as `field: message`; otherwise the
    /// status class picks between the server's message and a fixed fallback.
    pub fn user_message(&self) -> String {
        if !self.errors.is_empty() {
            return self
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("\n");
        }

        match self.status {
            400 => self.message_or("Invalid request. Please check your input."),
            401 => self.message_or("You are not authenticated. Please log in."),
            403 => "You do not have permission to perform this action.".to_string(),
            404 => self.message_or("The requested resource was not found."),
            409 => self.message_or("A conflict occurred. The resource may already exist."),
            500 => "A server error occurred. Please try again later.".to_string(),
            _ => self.message.clone(),
        }
    }

    /// The server message, unless only the default placeholder is present.
    fn message_or(&self, fallback: &str) -> String {
        if self.message == DEFAULT_API_MESSAGE {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_data_envelope() {
        let body = br#"{"status":"Error","data":{"title":"Library not found","details":"No library with id 42"}}"#;
        let err = ApiError::from_body(404, body);
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "Library not found");
        assert_eq!(err.details.as_deref(), Some("No library with id 42"));
        assert!(err.is_not_found());
    }

    #[test]
    fn data_details_used_as_message_when_title_absent() {
        let body = br#"{"status":"Error","data":{"details":"Token expired"}}"#;
        let err = ApiError::from_body(401, body);
        assert_eq!(err.message, "Token expired");
        assert_eq!(err.details.as_deref(), Some("Token expired"));
    }

    #[test]
    fn derives_from_error_object() {
        let body = br#"{"error":{"code":"LIB_409","message":"Title already in use","details":"Pick another title"}}"#;
        let err = ApiError::from_body(409, body);
        assert_eq!(err.code.as_deref(), Some("LIB_409"));
        assert_eq!(err.message, "Title already in use");
        assert_eq!(err.details.as_deref(), Some("Pick another title"));
    }

    #[test]
    fn data_title_outranks_error_message() {
        let body = br#"{"data":{"title":"From data"},"error":{"code":"X","message":"From error"}}"#;
        let err = ApiError::from_body(400, body);
        assert_eq!(err.message, "From data");
        assert_eq!(err.code.as_deref(), Some("X"));
    }

    #[test]
    fn derives_from_flat_message_and_errors() {
        let body = br#"{"message":"Validation failed","errors":[{"field":"title","message":"must not be blank"}]}"#;
        let err = ApiError::from_body(400, body);
        assert_eq!(err.message, "Validation failed");
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "title");
        assert!(err.is_validation());
    }

    #[test]
    fn field_errors_from_data_envelope() {
        let body = br#"{"data":{"title":"Validation failed","errors":[{"field":"email","message":"must be a well-formed email address"},{"field":"password","message":"size must be between 6 and 100"}]}}"#;
        let err = ApiError::from_body(400, body);
        assert_eq!(err.errors.len(), 2);
        assert_eq!(
            err.user_message(),
            "email: must be a well-formed email address\npassword: size must be between 6 and 100"
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_default_message() {
        let err = ApiError::from_body(500, b"<html>Internal Server Error</html>");
        assert_eq!(err.message, "An error occurred");
        assert_eq!(err.code, None);
        assert!(err.errors.is_empty());
    }

    #[test]
    fn display_includes_status_and_code() {
        let body = br#"{"error":{"code":"AUTH_001","message":"Invalid email or password"}}"#;
        let err = ApiError::from_body(401, body);
        assert_eq!(err.to_string(), "HTTP 401 [AUTH_001]: Invalid email or password");
    }

    #[test]
    fn fixed_messages_for_transport_failures() {
        let connect = Error::Transport(TransportError::Connection {
            message: "tcp connect error".to_string(),
        });
        assert_eq!(
            connect.user_message(),
            "Unable to connect to server. Please check your internet connection."
        );

        let timeout = Error::Transport(TransportError::Timeout { duration_ms: 30_000 });
        assert_eq!(timeout.user_message(), "Request timeout. Please try again.");
    }

    #[test]
    fn fixed_message_for_session_expiry() {
        let err = Error::Auth(AuthError::SessionExpired);
        assert_eq!(err.user_message(), "Session expired. Please login again.");
    }

    #[test]
    fn forbidden_ignores_server_message() {
        let body = br#"{"data":{"title":"Nope"}}"#;
        let err = ApiError::from_body(403, body);
        assert_eq!(
            err.user_message(),
            "You do not have permission to perform this action."
        );
    }

    #[test]
    fn status_fallbacks_used_when_no_server_message() {
        let err = ApiError::from_body(404, b"");
        assert_eq!(err.user_message(), "The requested resource was not found.");

        let err = ApiError::from_body(409, b"{}");
        assert_eq!(
            err.user_message(),
            "A conflict occurred. The resource may already exist."
        );
    }

    #[test]
    fn server_message_preferred_over_status_fallback() {
        let body = br#"{"data":{"title":"Invalid email or password"}}"#;
        let err = ApiError::from_body(401, body);
        assert_eq!(err.user_message(), "Invalid email or password");
    }
}
