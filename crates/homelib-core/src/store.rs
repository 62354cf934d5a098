//! Credential storage for session state.
//!
//! The gateway reads and writes tokens through the [`CredentialStore`]
//! trait so persistence is pluggable: [`MemoryStore`] lives here, a
//! file-backed store lives with the HTTP client. All methods are
//! synchronous; implementations must not block beyond a lock acquisition,
//! because the gateway calls them while coordinating recovery.

use std::fmt;
use std::sync::RwLock;

use crate::model::User;
use crate::tokens::{AccessToken, RefreshToken};

/// A snapshot of the credentials held for the active session.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub access_token: AccessToken,
    pub refresh_token: Option<RefreshToken>,
    /// The identity returned at login, if known.
    pub user: Option<User>,
}

/// Storage for the active session's tokens and identity.
pub trait CredentialStore: Send + Sync + fmt::Debug {
    /// Snapshot of the stored credentials, if a session is present.
    fn credentials(&self) -> Option<StoredCredentials>;

    /// Replace the stored session wholesale.
    fn set_session(&self, credentials: StoredCredentials);

    /// Replace the token pair atomically, keeping any cached identity.
    ///
    /// Creates a session if none exists yet.
    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>);

    /// Clear all stored credentials.
    ///
    /// Returns `true` if a session was present. Idempotent.
    fn clear(&self) -> bool;

    /// The current access token, if any.
    fn access_token(&self) -> Option<AccessToken> {
        self.credentials().map(|c| c.access_token)
    }

    /// The current refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken> {
        self.credentials().and_then(|c| c.refresh_token)
    }

    /// The cached identity, if any.
    fn user(&self) -> Option<User> {
        self.credentials().and_then(|c| c.user)
    }

    /// Whether a session is present.
    fn is_authenticated(&self) -> bool {
        self.credentials().is_some()
    }
}

/// Process-lifetime credential storage.
///
/// Used as the fallback when persistent storage is unavailable, and as the
/// default store for short-lived gateways (tests, one-shot tools).
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RwLock<Option<StoredCredentials>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn credentials(&self) -> Option<StoredCredentials> {
        self.session.read().unwrap().clone()
    }

    fn set_session(&self, credentials: StoredCredentials) {
        *self.session.write().unwrap() = Some(credentials);
    }

    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) {
        let mut session = self.session.write().unwrap();
        let user = session.as_ref().and_then(|c| c.user.clone());
        *session = Some(StoredCredentials {
            access_token: access,
            refresh_token: refresh,
            user,
        });
    }

    fn clear(&self) -> bool {
        self.session.write().unwrap().take().is_some()
    }
}
