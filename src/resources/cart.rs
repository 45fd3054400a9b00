//! The current user's cart.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::json_body;
use crate::clients::{ApiClient, ApiError, ApiRequest, HttpMethod};

/// Body of `POST /cart/add/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id.
    pub product: u64,
    /// Units to add.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line for `quantity` units of `product`.
    #[must_use]
    pub const fn new(product: u64, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

impl ApiClient {
    /// Adds `quantity` units of a product: `POST /cart/add/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn add_to_cart(&self, product_id: u64, quantity: u32) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, "/cart/add/")
            .body(json_body(&CartItem::new(product_id, quantity))?)
            .build()?;
        self.request(request).await
    }

    /// Adds a single unit of a product.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn add_one_to_cart(&self, product_id: u64) -> Result<Option<Value>, ApiError> {
        self.add_to_cart(product_id, 1).await
    }

    /// Fetches the cart: `GET /cart/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_cart(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/cart/")?).await
    }

    /// Turns the cart into an order: `POST /cart/checkout/` with body `{}`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn checkout_cart(&self) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, "/cart/checkout/")
            .body(json!({}))
            .build()?;
        self.request(request).await
    }
}
