//! Authentication types for the TemucoSoft API client.
//!
//! # Overview
//!
//! - [`Credentials`]: the access/refresh token pair held by the client
//! - [`AccessToken`] / [`RefreshToken`]: masked token newtypes
//! - [`TokenPair`] / [`RefreshedToken`]: payloads of the token endpoints
//! - [`TokenStore`]: persistent key-value storage mirroring the credentials
//! - [`Navigator`]: the login redirect side effect
//! - [`AuthError`]: login and refresh failures
//!
//! The login, refresh and logout operations themselves live on
//! [`ApiClient`](crate::ApiClient), which owns the credentials.
//!
//! # Example
//!
//! ```rust
//! use temucosoft_api::auth::{Credentials, MemoryTokenStore, TokenStore};
//!
//! let store = MemoryTokenStore::new();
//! store.set("access_token", "T1").unwrap();
//! store.set("refresh_token", "R1").unwrap();
//!
//! let credentials = Credentials::load(&store);
//! assert!(credentials.is_authenticated());
//! ```

mod credentials;
mod error;
mod navigator;
mod storage;

pub use credentials::{
    AccessToken, Credentials, RefreshToken, RefreshedToken, TokenPair, ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
};
pub use error::AuthError;
pub use navigator::{LoggingNavigator, Navigator, RecordingNavigator};
pub use storage::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
