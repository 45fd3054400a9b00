//! HTTP-specific error types for the API client.
//!
//! - [`HttpResponseError`]: a non-2xx response (after at most one retry)
//! - [`InvalidRequestError`]: a request descriptor that failed validation
//! - [`ApiError`]: unified error type returned by every client call
//!
//! # Example
//!
//! ```rust,ignore
//! use temucosoft_api::{ApiError, AuthError};
//!
//! match client.get_product(5).await {
//!     Ok(product) => println!("{product:?}"),
//!     Err(ApiError::Auth(e)) if e.forced_logout() => println!("Session ended: {e}"),
//!     Err(ApiError::Response(e)) => println!("Server said {}: {}", e.status, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when a request receives a non-successful response.
///
/// `message` holds the diagnostic extracted from the response body, or the
/// status's standard reason phrase when the body carried none.
///
/// # Example
///
/// ```rust
/// use temucosoft_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     status: 404,
///     message: "Producto no encontrado".to_string(),
/// };
/// assert_eq!(error.to_string(), "Error 404: Producto no encontrado");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error {status}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The diagnostic message.
    pub message: String,
}

/// Error returned when a request descriptor fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// GET and DELETE requests cannot carry a body.
    #[error("Cannot send a body with a {method} request.")]
    BodyNotAllowed {
        /// The offending HTTP method.
        method: String,
    },

    /// Endpoints are paths relative to the API base and must start with '/'.
    #[error("Endpoint '{endpoint}' must start with '/'.")]
    RelativeEndpoint {
        /// The offending endpoint.
        endpoint: String,
    },
}

/// Unified error type for all client calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication was missing or could not be restored.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request descriptor failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response body was not valid JSON, or did not match the
    /// requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::Auth(AuthError::RefreshFailed { status }) => Some(*status),
            _ => None,
        }
    }
}
