//! # User Management Endpoints
//!
//! Admin-only account management. The backend enforces the role checks;
//! the client merely hides these screens from non-admins.

use reqwest::Method;
use shared::{UserInfo, UserPayload};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// List all users.
pub async fn list(client: &ApiClient) -> Result<Vec<UserInfo>, ApiError> {
    client.send_json(client.request(Method::GET, "/users")).await
}

/// Create a user.
pub async fn create(client: &ApiClient, payload: UserPayload) -> Result<UserInfo, ApiError> {
    client
        .send_json(client.request(Method::POST, "/users").json(&payload))
        .await
}

/// Update a user. An absent password keeps the stored one.
pub async fn update(client: &ApiClient, id: i64, payload: UserPayload) -> Result<UserInfo, ApiError> {
    client
        .send_json(
            client
                .request(Method::PUT, &format!("/users/{}", id))
                .json(&payload),
        )
        .await
}

/// Delete a user.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .send_empty(client.request(Method::DELETE, &format!("/users/{}", id)))
        .await
}
