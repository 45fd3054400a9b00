//! The authenticated request gateway.
//!
//! [`ApiClient`] owns the credential pair, mirrors it into a [`TokenStore`],
//! and funnels every endpoint call through [`ApiClient::request`], which
//! attaches the bearer header and performs at most one refresh-and-retry
//! when the server answers 401.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::{
    AccessToken, AuthError, Credentials, Navigator, RefreshToken, RefreshedToken, TokenPair,
    TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
use crate::clients::errors::ApiError;
use crate::clients::http_request::ApiRequest;
use crate::clients::http_response::read_json_body;
use crate::config::ApiConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Endpoint issuing a token pair for a username and password.
pub const LOGIN_ENDPOINT: &str = "/token/";

/// Endpoint exchanging a refresh token for a new access token.
pub const REFRESH_ENDPOINT: &str = "/token/refresh/";

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Authenticated client for the TemucoSoft REST API.
///
/// The client is constructed explicitly with its storage and navigation
/// capabilities; there is no global instance. On construction it picks up
/// any credentials already present in the store.
///
/// # Token lifecycle
///
/// - [`login`](Self::login) stores and holds both tokens
/// - [`request`](Self::request) sends the access token; on 401 it refreshes
///   once and retries once
/// - [`refresh_access_token`](Self::refresh_access_token) replaces the access
///   token, or logs out when that is impossible
/// - [`logout`](Self::logout) clears both tokens and redirects to login
///
/// Refreshes are serialized: when several requests are rejected with the
/// same access token, only the first performs the refresh call and the
/// others retry with its result.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`; share it between tasks with an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use temucosoft_api::{ApiBaseUrl, ApiClient, ApiConfig};
/// use temucosoft_api::auth::{FileTokenStore, LoggingNavigator};
/// use temucosoft_api::resources::Page;
///
/// let config = ApiConfig::builder()
///     .base_url(ApiBaseUrl::from_origin("https://erp.example.com")?)
///     .build()?;
/// let client = ApiClient::new(config, FileTokenStore::new("tokens.json"), LoggingNavigator);
///
/// if !client.is_authenticated() {
///     client.login("cajero", "secreto").await?;
/// }
/// let products = client.get_products(Page::default()).await?;
/// ```
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    store: Box<dyn TokenStore>,
    navigator: Box<dyn Navigator>,
    credentials: RwLock<Credentials>,
    refresh_lock: Mutex<()>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("credentials", &*self.read_credentials())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client, loading any credentials already held by `store`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(
        config: ApiConfig,
        store: impl TokenStore + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        let credentials = Credentials::load(&store);

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}TemucoSoft API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("Failed to create HTTP client");

        tracing::debug!(
            base_url = %config.base_url(),
            authenticated = credentials.is_authenticated(),
            "API client created"
        );

        Self {
            http,
            config,
            store: Box::new(store),
            navigator: Box::new(navigator),
            credentials: RwLock::new(credentials),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Returns the configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns a snapshot of the held credentials.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.read_credentials().clone()
    }

    /// Returns `true` if an access token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_credentials().is_authenticated()
    }

    /// Returns the expiry of the held access token, when it is a JWT with an
    /// `exp` claim.
    #[must_use]
    pub fn access_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.access_token().and_then(|token| token.expires_at())
    }

    /// Returns `true` if the held access token is known to have expired.
    #[must_use]
    pub fn access_token_expired(&self) -> bool {
        self.access_token().is_some_and(|token| token.expired())
    }

    /// Guards a page or screen that requires authentication.
    ///
    /// When no access token is held and `current_path` is not itself a login
    /// page, the navigator is sent to the login path. Returns whether the
    /// caller may proceed.
    pub fn ensure_authenticated(&self, current_path: &str) -> bool {
        if self.is_authenticated() {
            return true;
        }
        if !current_path.contains("/login") {
            self.navigator.redirect(self.config.login_path());
        }
        false
    }

    /// Obtains a token pair for `username` and `password`.
    ///
    /// On success both tokens are stored and held, and the payload is
    /// returned. A rejected login leaves the held credentials untouched.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] on any non-2xx response
    /// - [`AuthError::Network`] if the token endpoint is unreachable
    /// - [`AuthError::MalformedTokenResponse`] if the payload is not a token pair
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AuthError> {
        let response = self
            .http
            .post(self.config.base_url().join(LOGIN_ENDPOINT))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(username, status = status.as_u16(), "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let text = response.text().await?;
        let pair: TokenPair = serde_json::from_str(&text)?;

        self.persist(ACCESS_TOKEN_KEY, &pair.access);
        self.persist(REFRESH_TOKEN_KEY, &pair.refresh);
        *self.write_credentials() = Credentials::from_token_pair(&pair);

        tracing::info!(username, "Logged in");
        Ok(pair)
    }

    /// Exchanges the held refresh token for a new access token.
    ///
    /// Only the access token is replaced; the refresh token is kept unless
    /// the configuration opts in to rotated refresh tokens.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NoRefreshToken`] if no refresh token is held (logs out)
    /// - [`AuthError::RefreshFailed`] on a non-2xx response (logs out)
    /// - [`AuthError::Network`] if the refresh endpoint is unreachable
    /// - [`AuthError::MalformedTokenResponse`] if the payload has no access token
    pub async fn refresh_access_token(&self) -> Result<AccessToken, AuthError> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Clears both tokens from memory and storage, then redirects to login.
    ///
    /// Idempotent. Storage failures are logged and do not stop the logout.
    pub fn logout(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(error) = self.store.remove(key) {
                tracing::warn!(key, %error, "Failed to clear stored token");
            }
        }
        *self.write_credentials() = Credentials::default();

        tracing::info!("Logged out");
        self.navigator.redirect(self.config.login_path());
    }

    /// Sends an authenticated request and returns the parsed JSON body.
    ///
    /// Returns `Ok(None)` for 204 responses and empty bodies.
    ///
    /// # Errors
    ///
    /// - [`AuthError::TokenAbsent`] without touching the network when logged
    ///   out (and logs out again, which redirects)
    /// - any refresh error when a 401 could not be recovered
    /// - [`ApiError::Response`] for a non-2xx status after at most one retry
    /// - [`ApiError::Network`] / [`ApiError::Json`] for transport and parse failures
    pub async fn request(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        let Some(token) = self.access_token() else {
            tracing::warn!(endpoint = %request.endpoint, "No access token held, logging out");
            self.logout();
            return Err(AuthError::TokenAbsent.into());
        };

        request.verify()?;

        let response = self.dispatch(&request, &token).await?;
        let response = if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!(endpoint = %request.endpoint, "Access token rejected, refreshing");
            let token = self.refresh_after_unauthorized(&token).await?;
            self.dispatch(&request, &token).await?
        } else {
            response
        };

        read_json_body(response).await
    }

    /// Sends an authenticated request and deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request), plus [`ApiError::Json`] when the
    /// body does not match `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, ApiError> {
        let value = self.request(request).await?;
        Ok(value.map(serde_json::from_value).transpose()?)
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: &AccessToken,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = self.config.base_url().join(&request.endpoint);
        tracing::debug!(method = %request.method, %url, "Sending API request");

        let mut builder = self
            .http
            .request(request.method.as_reqwest(), &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(AUTHORIZATION, token.bearer());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        builder.send().await
    }

    /// Refreshes after `rejected` drew a 401, unless a concurrent request
    /// already replaced it.
    async fn refresh_after_unauthorized(
        &self,
        rejected: &AccessToken,
    ) -> Result<AccessToken, AuthError> {
        let _guard = self.refresh_lock.lock().await;

        match self.access_token() {
            Some(current) if &current == rejected => self.refresh_locked().await,
            Some(current) => {
                tracing::debug!("Access token already refreshed by a concurrent request");
                Ok(current)
            }
            None => {
                tracing::debug!("Session ended by a concurrent refresh");
                Err(AuthError::NoRefreshToken)
            }
        }
    }

    /// Performs the refresh call. Callers hold `refresh_lock`.
    async fn refresh_locked(&self) -> Result<AccessToken, AuthError> {
        let held = self.read_credentials().refresh_token.clone();
        let Some(refresh_token) = held else {
            tracing::warn!("No refresh token held, logging out");
            self.logout();
            return Err(AuthError::NoRefreshToken);
        };

        let response = self
            .http
            .post(self.config.base_url().join(REFRESH_ENDPOINT))
            .json(&RefreshRequest {
                refresh: refresh_token.as_ref(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token refresh rejected, logging out");
            self.logout();
            return Err(AuthError::RefreshFailed {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let refreshed: RefreshedToken = serde_json::from_str(&text)?;

        let access = AccessToken::new(refreshed.access);
        let rotated = refreshed
            .refresh
            .filter(|_| self.config.adopt_rotated_refresh())
            .map(RefreshToken::new);

        self.persist(ACCESS_TOKEN_KEY, access.as_ref());
        if let Some(refresh) = &rotated {
            self.persist(REFRESH_TOKEN_KEY, refresh.as_ref());
        }

        {
            let mut credentials = self.write_credentials();
            credentials.access_token = Some(access.clone());
            if let Some(refresh) = rotated {
                credentials.refresh_token = Some(refresh);
            }
        }

        tracing::info!("Access token refreshed");
        Ok(access)
    }

    fn access_token(&self) -> Option<AccessToken> {
        self.read_credentials().access_token.clone()
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(error) = self.store.set(key, value) {
            tracing::warn!(key, %error, "Failed to persist token");
        }
    }

    fn read_credentials(&self) -> RwLockReadGuard<'_, Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_credentials(&self) -> RwLockWriteGuard<'_, Credentials> {
        self.credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
