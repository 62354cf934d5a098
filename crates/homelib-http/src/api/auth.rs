//! Account and session operations.

use tracing::{debug, info, instrument};

use homelib_core::credentials::Credentials;
use homelib_core::model::{Envelope, RegistrationRequest, User};
use homelib_core::store::StoredCredentials;
use homelib_core::tokens::{AccessToken, RefreshToken};
use homelib_core::Result;

use crate::endpoints::{self, LoginData, LoginRequest};
use crate::gateway::Gateway;

impl Gateway {
    /// Authenticate and store the returned session.
    ///
    /// On success the token pair and the account identity are written to
    /// the credential store.
    ///
    /// # Errors
    ///
    /// A rejected login surfaces the service's own error (it is a public
    /// endpoint, so no recovery is attempted).
    #[instrument(skip(self, credentials), fields(base = %self.base_url(), email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        info!("creating new session");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let response: Envelope<LoginData> = self.post(endpoints::LOGIN, &request).await?;
        let data = response.data;

        let user = data.user;
        self.inner.store.set_session(StoredCredentials {
            access_token: AccessToken::new(data.token),
            refresh_token: data.refresh_token.map(RefreshToken::new),
            user: Some(user.clone()),
        });

        debug!(username = %user.username, "session created");
        Ok(user)
    }

    /// Register a new account. Does not log in.
    #[instrument(skip(self, request), fields(base = %self.base_url(), username = %request.username))]
    pub async fn register(&self, request: &RegistrationRequest) -> Result<User> {
        info!("registering account");

        let response: Envelope<User> = self.post(endpoints::REGISTER, request).await?;
        Ok(response.data)
    }

    /// End the session and clear stored credentials.
    ///
    /// Purely client-side; the service holds no session state beyond the
    /// tokens themselves.
    pub fn logout(&self) {
        self.evict_session();
    }

    /// The identity cached at login, if a session is stored.
    pub fn current_user(&self) -> Option<User> {
        self.inner.store.user()
    }
}
