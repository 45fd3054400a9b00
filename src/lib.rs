//! # TemucoSoft API client
//!
//! An authenticated Rust client for the TemucoSoft inventory, sales and
//! ordering REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Bearer-token authentication with login, refresh and logout
//! - Credential persistence through the injectable [`TokenStore`](auth::TokenStore)
//! - A single request primitive, [`ApiClient::request`], with one
//!   refresh-and-retry on 401
//! - Convenience methods for every REST endpoint (see [`resources`])
//!
//! ## Quick Start
//!
//! ```rust
//! use temucosoft_api::{ApiBaseUrl, ApiClient, ApiConfig};
//! use temucosoft_api::auth::{LoggingNavigator, MemoryTokenStore};
//!
//! let config = ApiConfig::builder()
//!     .base_url(ApiBaseUrl::from_origin("https://erp.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(config, MemoryTokenStore::new(), LoggingNavigator);
//! assert!(!client.is_authenticated());
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! client.login("cajero", "secreto").await?;
//!
//! let product = client.get_product(5).await?;
//! client.add_to_cart(5, 2).await?;
//! let order = client.checkout_cart().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client, its store and its navigator are passed explicitly
//! - **Fail-fast validation**: configuration and request descriptors validate on construction
//! - **Thread-safe**: [`ApiClient`] is `Send + Sync`
//! - **Bounded retries**: at most one retry, and only after a successful refresh

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use auth::{
    AccessToken, AuthError, Credentials, RefreshToken, RefreshedToken, TokenPair,
};
pub use config::{ApiBaseUrl, ApiConfig, ApiConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiClient, ApiError, ApiRequest, ApiRequestBuilder, HttpMethod, HttpResponseError,
    InvalidRequestError,
};
