//! HTTP client types for TemucoSoft API communication.
//!
//! # Overview
//!
//! - [`ApiClient`]: the authenticated request gateway
//! - [`ApiRequest`]: a request descriptor, built with [`ApiRequest::builder`]
//! - [`HttpMethod`]: supported HTTP methods
//! - [`ApiError`]: unified error type for client calls
//! - [`HttpResponseError`]: a non-2xx response and its diagnostic message
//!
//! # Example
//!
//! ```rust,ignore
//! use temucosoft_api::{ApiRequest, HttpMethod};
//! use serde_json::json;
//!
//! let request = ApiRequest::builder(HttpMethod::Post, "/orders/")
//!     .body(json!({"supplier": 2, "items": []}))
//!     .build()?;
//!
//! let order = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is exactly one automatic retry: a 401 response triggers a token
//! refresh, after which the request is sent once more with the new token.
//! Whatever the second response is, it is final.

mod api_client;
mod errors;
mod http_request;
mod http_response;

pub use api_client::{ApiClient, LOGIN_ENDPOINT, REFRESH_ENDPOINT, SDK_VERSION};
pub use errors::{ApiError, HttpResponseError, InvalidRequestError};
pub use http_request::{ApiRequest, ApiRequestBuilder, HttpMethod};
