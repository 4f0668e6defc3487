//! # Application Events
//!
//! Event types for async task communication between background tasks and
//! the main thread. Every network round trip ends in exactly one event;
//! list fetches carry the request sequence number they were issued with
//! so stale responses can be dropped.

use shared::{Category, LoginResponse, Product, Sale, SalesPage, SalesSummary, UserInfo};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<LoginResponse, String>),
    /// Background revalidation of a restored session completed
    SessionRevalidated(Result<UserInfo, String>),
    /// Backend answered 401; the persisted session is already cleared
    SessionExpired,

    /// Register-screen catalog fetch completed
    RegisterProductsLoaded {
        seq: u64,
        result: Result<Vec<Product>, String>,
    },
    /// Management-screen product fetch completed
    AdminProductsLoaded {
        seq: u64,
        result: Result<Vec<Product>, String>,
    },
    /// Product create/update completed
    ProductSaved(Result<Product, String>),
    /// Product delete completed, with the deleted id on success
    ProductDeleted(Result<i64, String>),
    /// Stock adjustment completed
    StockUpdated(Result<Product, String>),

    /// Category list fetch completed
    CategoriesLoaded(Result<Vec<Category>, String>),
    /// Category create/update completed
    CategorySaved(Result<Category, String>),
    /// Category delete completed, with the deleted id on success
    CategoryDeleted(Result<i64, String>),

    /// User list fetch completed
    UsersLoaded(Result<Vec<UserInfo>, String>),
    /// User create/update completed
    UserSaved(Result<UserInfo, String>),
    /// User delete completed, with the deleted id on success
    UserDeleted(Result<i64, String>),

    /// Checkout completed
    SaleSubmitted(Result<Sale, String>),
    /// Sales history page fetch completed
    SalesLoaded {
        seq: u64,
        result: Result<SalesPage, String>,
    },
    /// Single sale detail fetch completed
    SaleDetailLoaded(Result<Sale, String>),
    /// Dashboard metrics fetch completed
    SummaryLoaded(Result<SalesSummary, String>),
}
