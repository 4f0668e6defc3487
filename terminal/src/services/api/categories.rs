//! # Category Endpoints

use reqwest::Method;
use shared::{Category, CategoryPayload};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// List all categories.
pub async fn list(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client
        .send_json(client.request(Method::GET, "/categories"))
        .await
}

/// Create a category.
pub async fn create(client: &ApiClient, payload: CategoryPayload) -> Result<Category, ApiError> {
    client
        .send_json(client.request(Method::POST, "/categories").json(&payload))
        .await
}

/// Update a category.
pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: CategoryPayload,
) -> Result<Category, ApiError> {
    client
        .send_json(
            client
                .request(Method::PUT, &format!("/categories/{}", id))
                .json(&payload),
        )
        .await
}

/// Delete a category.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .send_empty(client.request(Method::DELETE, &format!("/categories/{}", id)))
        .await
}
