//! # Authentication Endpoints
//!
//! Login and identity revalidation.

use reqwest::Method;
use shared::{LoginRequest, LoginResponse, UserInfo};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Login with username and password.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { username, password };
    let result = client
        .send_json::<LoginResponse>(
            client.request(Method::POST, "/auth/login").json(&request),
        )
        .await;

    match &result {
        Ok(response) => tracing::info!(
            user_id = response.user.id,
            role = ?response.user.role,
            duration_ms = start.elapsed().as_millis(),
            "Login successful"
        ),
        Err(error) => tracing::warn!(
            error = %error,
            duration_ms = start.elapsed().as_millis(),
            "Login failed"
        ),
    }

    result
}

/// Fetch the identity behind the current bearer token.
///
/// Used to revalidate a session restored from disk; a 401 here retires
/// the stored session through the client's central handling.
pub async fn current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client
        .send_json(client.request(Method::GET, "/auth/me"))
        .await
}
