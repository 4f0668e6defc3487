//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! All requests funnel through [`ApiClient::send_json`] /
//! [`ApiClient::send_empty`], which attach the bearer token and apply
//! the one global auth rule: any 401 clears the persisted session and
//! emits [`AppEvent::SessionExpired`], regardless of which endpoint
//! answered it. Failures surface as [`ApiError`], which keeps the HTTP
//! status inspectable next to the operator-facing message.

use std::path::PathBuf;

use async_channel::Sender;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;

use crate::app::events::AppEvent;
use crate::core::error::ApiError;
use crate::core::service::ApiService;
use crate::session::storage;

/// Default base URL for the backend API server
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001/api";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "PDV_API_URL";

/// HTTP client for communicating with the backend API server.
///
/// Maintains a connection pool, the current bearer token and the
/// session file the token was restored from.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    session_file: PathBuf,
    event_tx: Sender<AppEvent>,
}

impl ApiClient {
    /// Create a client configured from the environment.
    ///
    /// The client uses a 10 second timeout to prevent freezing; a
    /// revalidation request that outlives it counts as failed.
    pub fn new(event_tx: Sender<AppEvent>) -> Self {
        Self::with_config(Self::base_url_from_env(), storage::session_path(), event_tx)
    }

    /// Resolve the backend base URL from `PDV_API_URL`, with a local
    /// development default.
    pub fn base_url_from_env() -> String {
        std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
    }

    /// Create a client with explicit configuration (used by tests).
    pub fn with_config(
        base_url: String,
        session_file: PathBuf,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            token: RwLock::new(None),
            session_file,
            event_tx,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install or drop the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    /// Build a request for `{base_url}{path}` with the bearer attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.token.read().as_ref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and decode a JSON body from the response.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send_checked(builder).await?;
        let status = response.status();
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::http(status.as_u16(), format!("Failed to parse response: {}", e)))
    }

    /// Send a request where the response body is irrelevant.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send_checked(builder).await.map(|_| ())
    }

    async fn send_checked(
        &self,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Network error: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized().await;
        }

        Err(ApiError::http(status.as_u16(), message))
    }

    /// Central 401 handling: the token is no longer valid anywhere, so
    /// forget it locally and tell the main thread.
    async fn handle_unauthorized(&self) {
        tracing::warn!("Backend answered 401, discarding session");
        storage::clear(&self.session_file);
        self.set_token(None);
        let _ = self.event_tx.send(AppEvent::SessionExpired).await;
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(
        &self,
        username: String,
        password: String,
    ) -> Result<shared::LoginResponse, ApiError> {
        super::auth::login(self, username, password).await
    }

    async fn current_user(&self) -> Result<shared::UserInfo, ApiError> {
        super::auth::current_user(self).await
    }

    async fn list_products(
        &self,
        search: Option<String>,
        category_id: Option<i64>,
    ) -> Result<Vec<shared::Product>, ApiError> {
        super::products::list(self, search, category_id).await
    }

    async fn create_product(
        &self,
        payload: shared::ProductPayload,
    ) -> Result<shared::Product, ApiError> {
        super::products::create(self, payload).await
    }

    async fn update_product(
        &self,
        id: i64,
        payload: shared::ProductPayload,
    ) -> Result<shared::Product, ApiError> {
        super::products::update(self, id, payload).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        super::products::delete(self, id).await
    }

    async fn update_stock(&self, id: i64, stock: i64) -> Result<shared::Product, ApiError> {
        super::products::update_stock(self, id, stock).await
    }

    async fn list_categories(&self) -> Result<Vec<shared::Category>, ApiError> {
        super::categories::list(self).await
    }

    async fn create_category(
        &self,
        payload: shared::CategoryPayload,
    ) -> Result<shared::Category, ApiError> {
        super::categories::create(self, payload).await
    }

    async fn update_category(
        &self,
        id: i64,
        payload: shared::CategoryPayload,
    ) -> Result<shared::Category, ApiError> {
        super::categories::update(self, id, payload).await
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        super::categories::delete(self, id).await
    }

    async fn list_users(&self) -> Result<Vec<shared::UserInfo>, ApiError> {
        super::users::list(self).await
    }

    async fn create_user(&self, payload: shared::UserPayload) -> Result<shared::UserInfo, ApiError> {
        super::users::create(self, payload).await
    }

    async fn update_user(
        &self,
        id: i64,
        payload: shared::UserPayload,
    ) -> Result<shared::UserInfo, ApiError> {
        super::users::update(self, id, payload).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        super::users::delete(self, id).await
    }

    async fn create_sale(&self, request: shared::SaleRequest) -> Result<shared::Sale, ApiError> {
        super::sales::create(self, request).await
    }

    async fn list_sales(
        &self,
        query: super::sales::SalesQuery,
    ) -> Result<shared::SalesPage, ApiError> {
        super::sales::list(self, query).await
    }

    async fn sale_detail(&self, id: i64) -> Result<shared::Sale, ApiError> {
        super::sales::detail(self, id).await
    }

    async fn sales_summary(&self) -> Result<shared::SalesSummary, ApiError> {
        super::sales::summary(self).await
    }
}
