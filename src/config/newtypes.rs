//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// Path segment appended to the origin to reach the REST API.
pub const API_PATH_PREFIX: &str = "/api";

/// The validated base URL of the REST API.
///
/// Built from a site origin (`scheme://host[:port]`); a trailing slash is
/// dropped and [`API_PATH_PREFIX`] is appended, so every endpoint path is
/// resolved relative to `<origin>/api`.
///
/// # Example
///
/// ```rust
/// use temucosoft_api::ApiBaseUrl;
///
/// let base = ApiBaseUrl::from_origin("https://erp.example.com/").unwrap();
/// assert_eq!(base.as_ref(), "https://erp.example.com/api");
/// assert_eq!(base.origin(), "https://erp.example.com");
/// assert_eq!(base.join("/products/5/"), "https://erp.example.com/api/products/5/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    origin_end: usize,
}

impl ApiBaseUrl {
    /// Creates a base URL from a site origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] if the scheme is not `http` or
    /// `https`, the host is missing, or the origin carries a path, query or
    /// fragment.
    pub fn from_origin(origin: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = origin.into();
        let origin = raw.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidOrigin { url: raw.clone() };

        let scheme_end = origin.find("://").ok_or_else(invalid)?;
        let scheme = &origin[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let authority = &origin[scheme_end + 3..];
        if authority.is_empty() || authority.contains(['/', '?', '#', ' ']) {
            return Err(invalid());
        }

        let host = authority
            .rsplit_once(':')
            .map_or(authority, |(host, port)| {
                if port.chars().all(|c| c.is_ascii_digit()) {
                    host
                } else {
                    authority
                }
            });
        if host.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            origin_end: origin.len(),
            url: format!("{origin}{API_PATH_PREFIX}"),
        })
    }

    /// Returns the origin this base URL was built from, without trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.origin_end]
    }

    /// Resolves an endpoint path (e.g. `/products/`) against the API base.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.url)
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
