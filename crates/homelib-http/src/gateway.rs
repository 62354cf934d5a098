//! The authenticated request gateway.
//!
//! Every request to the library service flows through a [`Gateway`]. The
//! gateway attaches the stored bearer token to protected endpoints and
//! reacts to authorization expiry: the first 401 starts a token refresh,
//! concurrent failures queue behind it, and once the refresh settles the
//! whole queue is replayed (each request exactly once) or failed together.
//! When recovery is impossible the session is evicted and subscribers are
//! notified exactly once.
//!
//! # Thread safety
//!
//! Gateways are cheap to clone (they use an internal `Arc`) and safe to
//! share across tasks. Recovery coordination runs on a detached task, so a
//! caller cancelled mid-recovery cannot strand the queued requests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::{broadcast, oneshot};
use tracing::{debug, info, instrument, trace, warn};

use homelib_core::error::{ApiError, AuthError, Error, InvalidInputError, TransportError};
use homelib_core::model::Envelope;
use homelib_core::store::{CredentialStore, MemoryStore};
use homelib_core::tokens::{AccessToken, RefreshToken};
use homelib_core::types::BaseUrl;
use homelib_core::Result;

use crate::endpoints::{self, RefreshData, RefreshRequest, is_public_endpoint};

/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Session lifecycle notifications emitted by the gateway.
///
/// Each eviction emits exactly one event, no matter how many queued
/// requests observed the failure. The UI analog of `Expired` is the
/// redirect to the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Stored credentials were evicted because recovery failed.
    Expired,
    /// The session ended through an explicit logout.
    LoggedOut,
}

/// How a recovery round settled, shared with every queued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecoveryOutcome {
    Refreshed,
    Failed,
}

/// Recovery coordination state. One mutex owns the in-flight flag, the
/// queue and the eviction epoch so settlement is a single critical section.
struct RecoveryState {
    in_flight: bool,
    /// Bumped on every eviction; guards a racing refresh from writing
    /// tokens into a store that was cleared after the refresh started.
    epoch: u64,
    waiters: Vec<oneshot::Sender<RecoveryOutcome>>,
}

/// A request in replayable form. Bodies are kept as JSON values so a
/// queued request can be resent after recovery.
struct RequestSpec {
    method: Method,
    endpoint: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
}

/// HTTP gateway for the library service.
#[derive(Clone)]
pub struct Gateway {
    pub(crate) inner: Arc<GatewayInner>,
}

pub(crate) struct GatewayInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base: BaseUrl,
    pub(crate) store: Arc<dyn CredentialStore>,
    recovery: Mutex<RecoveryState>,
    events: broadcast::Sender<SessionEvent>,
    timeout_ms: u64,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base", &self.inner.base)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Gateway`].
pub struct GatewayBuilder {
    base: BaseUrl,
    store: Option<Arc<dyn CredentialStore>>,
    timeout: Duration,
}

impl GatewayBuilder {
    /// Use a specific credential store instead of a fresh [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the gateway.
    pub fn build(self) -> Gateway {
        let http = reqwest::Client::builder()
            .user_agent(concat!("homelib/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .expect("failed to build HTTP client");

        let (events, _) = broadcast::channel(16);

        Gateway {
            inner: Arc::new(GatewayInner {
                http,
                base: self.base,
                store: self
                    .store
                    .unwrap_or_else(|| Arc::new(MemoryStore::new())),
                recovery: Mutex::new(RecoveryState {
                    in_flight: false,
                    epoch: 0,
                    waiters: Vec::new(),
                }),
                events,
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

impl Gateway {
    /// Create a gateway with default settings and in-memory storage.
    pub fn new(base: BaseUrl) -> Self {
        Self::builder(base).build()
    }

    /// Start building a gateway.
    pub fn builder(base: BaseUrl) -> GatewayBuilder {
        GatewayBuilder {
            base,
            store: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The base URL this gateway talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.inner.base
    }

    /// Whether a session is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.inner.store.is_authenticated()
    }

    /// Replace the stored token pair atomically.
    pub fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) {
        self.inner.store.set_tokens(access, refresh);
    }

    /// Subscribe to session lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Clear the session, failing any recovery still in flight.
    ///
    /// Emits [`SessionEvent::LoggedOut`] if a session was present.
    pub fn evict_session(&self) {
        self.evict(SessionEvent::LoggedOut);
    }

    /// Force a token refresh using the stored refresh token.
    ///
    /// Joins an in-flight recovery if one is running. On failure the
    /// session is evicted, same as an implicit recovery failure.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingRefreshToken`] when no refresh token is stored;
    /// [`AuthError::SessionExpired`] when the refresh was rejected.
    #[instrument(skip(self), fields(base = %self.inner.base))]
    pub async fn refresh_session(&self) -> Result<()> {
        if self.inner.store.refresh_token().is_none() {
            return Err(Error::Auth(AuthError::MissingRefreshToken));
        }
        match self.join_recovery().await {
            RecoveryOutcome::Refreshed => Ok(()),
            RecoveryOutcome::Failed => Err(Error::Auth(AuthError::SessionExpired)),
        }
    }

    // ========================================================================
    // Request surface
    // ========================================================================

    /// Send a request with full control over method, body and query.
    ///
    /// This is the generic operation behind the verb helpers. The response
    /// body is decoded as `R` on any 2xx status.
    #[instrument(skip(self, body), fields(base = %self.inner.base))]
    pub async fn send<R>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        query: Vec<(String, String)>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let spec = RequestSpec {
            method,
            endpoint: endpoint.to_string(),
            body,
            query,
        };
        let bytes = self.dispatch(spec).await?;
        decode(&bytes)
    }

    /// GET an endpoint.
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::GET, endpoint, None, Vec::new()).await
    }

    /// GET an endpoint with query parameters.
    ///
    /// `params` may be any serializable map-shaped value; `None` fields are
    /// skipped and scalars are stringified.
    pub async fn get_with<P, R>(&self, endpoint: &str, params: &P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::GET, endpoint, None, to_query(params)?)
            .await
    }

    /// POST a JSON body to an endpoint.
    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(to_body(body)?), Vec::new())
            .await
    }

    /// PUT a JSON body to an endpoint.
    pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::PUT, endpoint, Some(to_body(body)?), Vec::new())
            .await
    }

    /// PATCH an endpoint with a JSON body.
    pub async fn patch<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::PATCH, endpoint, Some(to_body(body)?), Vec::new())
            .await
    }

    /// DELETE an endpoint.
    pub async fn delete<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::DELETE, endpoint, None, Vec::new()).await
    }

    // ========================================================================
    // Recovery coordination
    // ========================================================================

    /// Send a request, recovering once from authorization expiry.
    async fn dispatch(&self, spec: RequestSpec) -> Result<Vec<u8>> {
        match self.attempt(&spec).await {
            Err(Error::Api(err))
                if err.is_unauthorized() && !is_public_endpoint(&spec.endpoint) =>
            {
                debug!(endpoint = %spec.endpoint, "authorization expired, joining recovery");
                match self.join_recovery().await {
                    // Replay exactly once; whatever comes back is final.
                    RecoveryOutcome::Refreshed => self.attempt(&spec).await,
                    RecoveryOutcome::Failed => Err(Error::Auth(AuthError::SessionExpired)),
                }
            }
            other => other,
        }
    }

    /// Queue behind the current recovery round, starting one if needed.
    async fn join_recovery(&self) -> RecoveryOutcome {
        let rx = {
            let mut state = self.inner.recovery.lock().unwrap();
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            if !state.in_flight {
                state.in_flight = true;
                let gateway = self.clone();
                let epoch = state.epoch;
                // Detached so caller cancellation cannot strand the queue
                tokio::spawn(async move { gateway.run_recovery(epoch).await });
            } else {
                trace!("recovery already in flight, queued");
            }
            rx
        };

        // A dropped sender means the session was torn down; treat as failure
        rx.await.unwrap_or(RecoveryOutcome::Failed)
    }

    /// The recovery round: refresh the token pair, then settle the queue.
    async fn run_recovery(self, epoch: u64) {
        info!("access token rejected, refreshing session");
        let refreshed = self.attempt_refresh(epoch).await;

        // Settlement is one critical section: flip the gate, evict on
        // failure, and take the whole queue. Store mutations stay under the
        // recovery lock so waiters always wake to a fully settled session,
        // and requests arriving later start a fresh round that fails fast
        // against the cleared store.
        let waiters = {
            let mut state = self.inner.recovery.lock().unwrap();
            state.in_flight = false;
            if !refreshed {
                state.epoch += 1;
                if self.inner.store.clear() {
                    let _ = self.inner.events.send(SessionEvent::Expired);
                }
            }
            std::mem::take(&mut state.waiters)
        };

        let outcome = if refreshed {
            debug!(queued = waiters.len(), "session refreshed, replaying queued requests");
            RecoveryOutcome::Refreshed
        } else {
            warn!(queued = waiters.len(), "session refresh failed, session evicted");
            RecoveryOutcome::Failed
        };

        for tx in waiters {
            let _ = tx.send(outcome);
        }
    }

    /// Exchange the refresh token for a new pair. Returns whether the
    /// stored session was updated.
    async fn attempt_refresh(&self, epoch: u64) -> bool {
        let refresh = match self.inner.store.refresh_token() {
            Some(token) => token,
            None => {
                warn!("no refresh token stored, recovery impossible");
                return false;
            }
        };

        let body = match to_body(&RefreshRequest {
            refresh_token: refresh.as_str(),
        }) {
            Ok(body) => body,
            Err(_) => return false,
        };

        let spec = RequestSpec {
            method: Method::POST,
            endpoint: endpoints::REFRESH.to_string(),
            body: Some(body),
            query: Vec::new(),
        };

        let bytes = match self.attempt(&spec).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "refresh request failed");
                return false;
            }
        };

        let envelope: Envelope<RefreshData> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(error = %err, "could not decode refresh response");
                return false;
            }
        };

        let data = envelope.data;
        let state = self.inner.recovery.lock().unwrap();
        if state.epoch != epoch {
            debug!("session evicted during refresh, discarding new tokens");
            return false;
        }
        // Keep the old refresh token when the server does not rotate one
        let next_refresh = data
            .refresh_token
            .map(RefreshToken::new)
            .or(Some(refresh));
        self.inner
            .store
            .set_tokens(AccessToken::new(data.access_token), next_refresh);
        drop(state);

        debug!("token pair replaced");
        true
    }

    /// Clear the session, bumping the epoch and failing queued waiters.
    fn evict(&self, event: SessionEvent) {
        let waiters = {
            let mut state = self.inner.recovery.lock().unwrap();
            state.epoch += 1;
            if self.inner.store.clear() {
                debug!(?event, "session evicted");
                let _ = self.inner.events.send(event);
            }
            std::mem::take(&mut state.waiters)
        };
        for tx in waiters {
            let _ = tx.send(RecoveryOutcome::Failed);
        }
    }

    // ========================================================================
    // Single attempt
    // ========================================================================

    /// Perform one HTTP attempt: no recovery, no retry.
    async fn attempt(&self, spec: &RequestSpec) -> Result<Vec<u8>> {
        let url = self.inner.base.endpoint_url(&spec.endpoint);
        let mut request = self.inner.http.request(spec.method.clone(), &url);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }
        if !is_public_endpoint(&spec.endpoint) {
            if let Some(token) = self.inner.store.access_token() {
                request = request.header(AUTHORIZATION, token.bearer());
            }
        }

        trace!(method = %spec.method, %url, "sending request");
        let response = request.send().await.map_err(|e| self.map_transport(e))?;
        let status = response.status();
        trace!(status = %status, "received response");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport(e))?;

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            Err(Error::Api(ApiError::from_body(status.as_u16(), &bytes)))
        }
    }

    /// Map a reqwest failure onto the transport taxonomy.
    fn map_transport(&self, err: reqwest::Error) -> Error {
        let transport = if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.inner.timeout_ms,
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        Error::Transport(transport)
    }
}

/// Decode a success body.
fn decode<R: DeserializeOwned>(bytes: &[u8]) -> Result<R> {
    serde_json::from_slice(bytes).map_err(|e| {
        Error::Transport(TransportError::Http {
            message: format!("failed to decode response body: {}", e),
        })
    })
}

/// Encode a request body as a replayable JSON value.
fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| {
        Error::InvalidInput(InvalidInputError::Other {
            message: format!("could not encode request body: {}", e),
        })
    })
}

/// Flatten a serializable value into query pairs.
///
/// `null` values are skipped, strings pass through, everything else is
/// stringified. Mirrors the loose param maps the service's web client
/// sends.
fn to_query<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(|e| {
        Error::InvalidInput(InvalidInputError::Other {
            message: format!("could not encode query parameters: {}", e),
        })
    })?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect()),
        _ => Err(Error::InvalidInput(InvalidInputError::Other {
            message: "query parameters must serialize to an object".to_string(),
        })),
    }
}
