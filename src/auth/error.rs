//! Authentication error types.
//!
//! # Error Types
//!
//! - [`AuthError::InvalidCredentials`]: the token endpoint rejected the login
//! - [`AuthError::NoRefreshToken`]: a refresh was needed but none is held
//! - [`AuthError::RefreshFailed`]: the refresh endpoint rejected the token
//! - [`AuthError::TokenAbsent`]: a request was attempted while logged out
//!
//! Every variant except [`AuthError::InvalidCredentials`] and the transport
//! variants is raised after the client has already logged out.
//!
//! # Example
//!
//! ```rust
//! use temucosoft_api::AuthError;
//!
//! let error = AuthError::RefreshFailed { status: 401 };
//! assert_eq!(error.to_string(), "Could not refresh the access token (status 401)");
//! ```

use thiserror::Error;

/// Errors raised by the login and token refresh flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login endpoint answered with a non-2xx status.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No refresh token is held.
    #[error("No refresh token available")]
    NoRefreshToken,

    /// The refresh endpoint answered with a non-2xx status.
    #[error("Could not refresh the access token (status {status})")]
    RefreshFailed {
        /// HTTP status returned by the refresh endpoint.
        status: u16,
    },

    /// No access token is held; the request was not sent.
    #[error("Access token absent")]
    TokenAbsent,

    /// The token endpoint could not be reached.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The token endpoint answered 2xx with a body that is not a token payload.
    #[error("Malformed token response: {0}")]
    MalformedTokenResponse(#[from] serde_json::Error),
}

impl AuthError {
    /// Returns `true` if the client logged out as part of raising this error.
    #[must_use]
    pub const fn forced_logout(&self) -> bool {
        matches!(
            self,
            Self::NoRefreshToken | Self::RefreshFailed { .. } | Self::TokenAbsent
        )
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::NoRefreshToken.to_string(), "No refresh token available");
        assert_eq!(AuthError::TokenAbsent.to_string(), "Access token absent");
    }

    #[test]
    fn test_forced_logout_variants() {
        assert!(AuthError::NoRefreshToken.forced_logout());
        assert!(AuthError::RefreshFailed { status: 400 }.forced_logout());
        assert!(AuthError::TokenAbsent.forced_logout());
        assert!(!AuthError::InvalidCredentials.forced_logout());
    }

    #[test]
    fn test_malformed_token_response_from_serde() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AuthError = parse_error.into();
        assert!(matches!(error, AuthError::MalformedTokenResponse(_)));
    }
}
