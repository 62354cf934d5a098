//! Login credentials.

use std::fmt;

/// Credentials for authenticating with the library service.
///
/// # Security
///
/// The password is never shown in Debug output.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The account email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The account password.
    ///
    /// # Security
    ///
    /// Use only when constructing a login request.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
