//! Products and inventory.

use serde::Serialize;
use serde_json::Value;

use super::{json_body, Page};
use crate::clients::{ApiClient, ApiError, ApiRequest, HttpMethod};

impl ApiClient {
    /// Lists products: `GET /products/?page=<n>`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_products(&self, page: impl Into<Page>) -> Result<Option<Value>, ApiError> {
        let page = page.into();
        let request = ApiRequest::builder(HttpMethod::Get, "/products/")
            .query_param("page", page.number())
            .query_param_opt("page_size", page.size())
            .build()?;
        self.request(request).await
    }

    /// Fetches one product: `GET /products/<id>/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_product(&self, id: u64) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get(format!("/products/{id}/"))?)
            .await
    }

    /// Creates a product: `POST /products/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_product(&self, product: &impl Serialize) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, "/products/")
            .body(json_body(product)?)
            .build()?;
        self.request(request).await
    }

    /// Partially updates a product: `PATCH /products/<id>/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_product(
        &self,
        id: u64,
        changes: &impl Serialize,
    ) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Patch, format!("/products/{id}/"))
            .body(json_body(changes)?)
            .build()?;
        self.request(request).await
    }

    /// Deletes a product: `DELETE /products/<id>/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_product(&self, id: u64) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Delete, format!("/products/{id}/")).build()?;
        self.request(request).await
    }

    /// Lists stock per branch: `GET /inventory/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_inventory(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/inventory/")?).await
    }
}
