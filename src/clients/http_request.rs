//! Request descriptors for the API client.
//!
//! This module provides the [`ApiRequest`] type and its builder.

use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods used by the REST API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the matching [`reqwest::Method`].
    #[must_use]
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// Returns `true` if requests with this method may carry a body.
    #[must_use]
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        })
    }
}

/// A request to be sent through [`ApiClient::request`](crate::ApiClient::request).
///
/// # Example
///
/// ```rust
/// use temucosoft_api::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// let list = ApiRequest::builder(HttpMethod::Get, "/products/")
///     .query_param("page", "2")
///     .build()
///     .unwrap();
///
/// let add = ApiRequest::builder(HttpMethod::Post, "/cart/add/")
///     .body(json!({"product": 5, "quantity": 1}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path relative to the API base (e.g. `/products/5/`).
    pub endpoint: String,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters, in insertion order.
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, endpoint)
    }

    /// Shorthand for a GET request without query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::RelativeEndpoint`] if `endpoint` does
    /// not start with `/`.
    pub fn get(endpoint: impl Into<String>) -> Result<Self, InvalidRequestError> {
        Self::builder(HttpMethod::Get, endpoint).build()
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if:
    /// - `endpoint` does not start with `/`
    /// - a body is set on a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if !self.endpoint.starts_with('/') {
            return Err(InvalidRequestError::RelativeEndpoint {
                endpoint: self.endpoint.clone(),
            });
        }

        if self.body.is_some() && !self.method.allows_body() {
            return Err(InvalidRequestError::BodyNotAllowed {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    endpoint: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is `Some`.
    #[must_use]
    pub fn query_param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query_param(key, value),
            None => self,
        }
    }

    /// Builds the [`ApiRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<ApiRequest, InvalidRequestError> {
        let request = ApiRequest {
            method: self.method,
            endpoint: self.endpoint,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
