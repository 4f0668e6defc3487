//! # Product Endpoints
//!
//! Catalog listing and product management.

use reqwest::Method;
use shared::{Product, ProductList, ProductPayload, StockUpdate};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// List products, optionally filtered by search term and category.
///
/// The backend always wraps the list in a `{"products": [...]}`
/// envelope, which is unwrapped here so callers see a plain `Vec`.
pub async fn list(
    client: &ApiClient,
    search: Option<String>,
    category_id: Option<i64>,
) -> Result<Vec<Product>, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
        query.push(("search", search.trim().to_string()));
    }
    if let Some(category_id) = category_id {
        query.push(("category_id", category_id.to_string()));
    }

    let envelope: ProductList = client
        .send_json(client.request(Method::GET, "/products").query(&query))
        .await?;
    Ok(envelope.products)
}

/// Create a product.
pub async fn create(client: &ApiClient, payload: ProductPayload) -> Result<Product, ApiError> {
    client
        .send_json(client.request(Method::POST, "/products").json(&payload))
        .await
}

/// Update a product.
pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: ProductPayload,
) -> Result<Product, ApiError> {
    client
        .send_json(
            client
                .request(Method::PUT, &format!("/products/{}", id))
                .json(&payload),
        )
        .await
}

/// Delete a product.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .send_empty(client.request(Method::DELETE, &format!("/products/{}", id)))
        .await
}

/// Set the absolute stock level of a product.
pub async fn update_stock(client: &ApiClient, id: i64, stock: i64) -> Result<Product, ApiError> {
    client
        .send_json(
            client
                .request(Method::PUT, &format!("/products/{}/stock", id))
                .json(&StockUpdate { stock }),
        )
        .await
}
