//! Supplier orders and purchases.

use serde::Serialize;
use serde_json::Value;

use super::json_body;
use crate::clients::{ApiClient, ApiError, ApiRequest, HttpMethod};

impl ApiClient {
    /// Lists orders: `GET /orders/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_orders(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/orders/")?).await
    }

    /// Creates an order: `POST /orders/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_order(&self, order: &impl Serialize) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, "/orders/")
            .body(json_body(order)?)
            .build()?;
        self.request(request).await
    }

    /// Lists purchases: `GET /purchases/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_purchases(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/purchases/")?).await
    }

    /// Records a purchase: `POST /purchases/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_purchase(&self, purchase: &impl Serialize) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, "/purchases/")
            .body(json_body(purchase)?)
            .build()?;
        self.request(request).await
    }
}
