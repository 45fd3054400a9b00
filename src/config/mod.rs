//! Configuration types for the TemucoSoft API client.
//!
//! # Overview
//!
//! - [`ApiConfig`]: The configuration consumed by [`ApiClient`](crate::ApiClient)
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`ApiBaseUrl`]: The validated `<origin>/api` base URL
//!
//! # Example
//!
//! ```rust
//! use temucosoft_api::{ApiBaseUrl, ApiConfig};
//!
//! let config = ApiConfig::builder()
//!     .base_url(ApiBaseUrl::from_origin("https://erp.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.login_path(), "/login/");
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, API_PATH_PREFIX};

use std::time::Duration;

use crate::error::ConfigError;

/// Location the navigator is sent to when authentication is lost.
pub const DEFAULT_LOGIN_PATH: &str = "/login/";

/// Configuration for the API client.
///
/// # Defaults
///
/// - `login_path`: [`DEFAULT_LOGIN_PATH`]
/// - `timeout`: `None` (the transport's own behavior applies)
/// - `user_agent_prefix`: `None`
/// - `adopt_rotated_refresh`: `false`
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: ApiBaseUrl,
    login_path: String,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    adopt_rotated_refresh: bool,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the path the navigator is sent to on logout.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether a rotated refresh token returned by the refresh
    /// endpoint replaces the held one.
    #[must_use]
    pub const fn adopt_rotated_refresh(&self) -> bool {
        self.adopt_rotated_refresh
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// The only required field is `base_url`.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    login_path: Option<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    adopt_rotated_refresh: Option<bool>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: ApiBaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the path used for the login redirect.
    #[must_use]
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Stores a rotated refresh token when the refresh endpoint returns one.
    ///
    /// Off by default: a successful refresh replaces only the access token.
    #[must_use]
    pub const fn adopt_rotated_refresh(mut self, adopt: bool) -> Self {
        self.adopt_rotated_refresh = Some(adopt);
        self
    }

    /// Builds the [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or [`ConfigError::InvalidLoginPath`] if the login path is not absolute.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let login_path = self
            .login_path
            .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        if !login_path.starts_with('/') {
            return Err(ConfigError::InvalidLoginPath { path: login_path });
        }

        Ok(ApiConfig {
            base_url,
            login_path,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            adopt_rotated_refresh: self.adopt_rotated_refresh.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> ApiBaseUrl {
        ApiBaseUrl::from_origin("https://erp.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = ApiConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ApiConfig::builder().base_url(base_url()).build().unwrap();

        assert_eq!(config.base_url().as_ref(), "https://erp.example.com/api");
        assert_eq!(config.login_path(), DEFAULT_LOGIN_PATH);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
        assert!(!config.adopt_rotated_refresh());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ApiConfig::builder()
            .base_url(base_url())
            .login_path("/acceso/")
            .user_agent_prefix("Caja/2.1")
            .timeout(Duration::from_secs(15))
            .adopt_rotated_refresh(true)
            .build()
            .unwrap();

        assert_eq!(config.login_path(), "/acceso/");
        assert_eq!(config.user_agent_prefix(), Some("Caja/2.1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert!(config.adopt_rotated_refresh());
    }

    #[test]
    fn test_builder_rejects_relative_login_path() {
        let result = ApiConfig::builder()
            .base_url(base_url())
            .login_path("login/")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidLoginPath { path }) if path == "login/"
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConfig>();
    }
}
