//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    Category, CategoryPayload, LoginResponse, Product, ProductPayload, Sale, SaleRequest,
    SalesPage, SalesSummary, UserInfo, UserPayload,
};

use crate::core::error::ApiError;
use crate::services::api::sales::SalesQuery;

/// Trait for backend API operations
///
/// This trait allows for dependency injection and mocking in tests. Every
/// method maps to exactly one REST endpoint; failures are [`ApiError`]s
/// whose `Display` is the operator-facing message.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with username and password
    async fn login(&self, username: String, password: String) -> Result<LoginResponse, ApiError>;

    /// Fetch the identity behind the current bearer token
    async fn current_user(&self) -> Result<UserInfo, ApiError>;

    /// List products, optionally filtered by search term and category
    async fn list_products(
        &self,
        search: Option<String>,
        category_id: Option<i64>,
    ) -> Result<Vec<Product>, ApiError>;

    /// Create a product
    async fn create_product(&self, payload: ProductPayload) -> Result<Product, ApiError>;

    /// Update a product
    async fn update_product(&self, id: i64, payload: ProductPayload) -> Result<Product, ApiError>;

    /// Delete a product
    async fn delete_product(&self, id: i64) -> Result<(), ApiError>;

    /// Set the absolute stock level of a product
    async fn update_stock(&self, id: i64, stock: i64) -> Result<Product, ApiError>;

    /// List categories
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Create a category
    async fn create_category(&self, payload: CategoryPayload) -> Result<Category, ApiError>;

    /// Update a category
    async fn update_category(&self, id: i64, payload: CategoryPayload) -> Result<Category, ApiError>;

    /// Delete a category
    async fn delete_category(&self, id: i64) -> Result<(), ApiError>;

    /// List users
    async fn list_users(&self) -> Result<Vec<UserInfo>, ApiError>;

    /// Create a user
    async fn create_user(&self, payload: UserPayload) -> Result<UserInfo, ApiError>;

    /// Update a user
    async fn update_user(&self, id: i64, payload: UserPayload) -> Result<UserInfo, ApiError>;

    /// Delete a user
    async fn delete_user(&self, id: i64) -> Result<(), ApiError>;

    /// Register a sale (the server prices items and decrements stock)
    async fn create_sale(&self, request: SaleRequest) -> Result<Sale, ApiError>;

    /// Fetch a page of recorded sales
    async fn list_sales(&self, query: SalesQuery) -> Result<SalesPage, ApiError>;

    /// Fetch one sale with its line items
    async fn sale_detail(&self, id: i64) -> Result<Sale, ApiError>;

    /// Fetch aggregate dashboard metrics
    async fn sales_summary(&self) -> Result<SalesSummary, ApiError>;
}
