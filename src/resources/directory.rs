//! Profile, users, branches, suppliers and subscriptions.

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiRequest};

impl ApiClient {
    /// Fetches the logged-in user's profile: `GET /profile/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_user_profile(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/profile/")?).await
    }

    /// Lists suppliers: `GET /suppliers/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_suppliers(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/suppliers/")?).await
    }

    /// Lists branches: `GET /branches/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_branches(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/branches/")?).await
    }

    /// Lists users: `GET /users/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_users(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/users/")?).await
    }

    /// Lists subscriptions: `GET /subscriptions/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_subscriptions(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/subscriptions/")?).await
    }

    /// Fetches the subscription of the user's company: `GET /subscriptions/me/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_my_subscription(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/subscriptions/me/")?).await
    }
}
