//! Token types for library service authentication.
//!
//! Both tokens are opaque strings issued by the server. They are wrapped in
//! newtypes so they cannot be mixed up at call sites and so `Debug` output
//! never leaks them into logs.

use std::fmt;

/// A short-lived access token attached to protected API requests.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Renders the `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns the raw token value.
    ///
    /// Use only for persisting the session; requests should go through
    /// [`AccessToken::bearer`].
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A longer-lived refresh token used to obtain a new access token after the
/// current one expires, without asking the user to log in again.
#[derive(Clone)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value for refresh requests and persistence.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Redacted Debug for both tokens; there is deliberately no Display impl.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}
