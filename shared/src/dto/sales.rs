use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a sale request. The client never sends prices; the server
/// is the source of truth for pricing and stock decrement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleItemRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// Body for `POST /sales`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleRequest {
    pub items: Vec<SaleItemRequest>,
}

/// One line of a recorded sale, with the price captured at sale time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_sale: Decimal,
    pub subtotal: Decimal,
}

/// A recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_username: String,
    pub items: Vec<SaleItem>,
    pub total_amount: Decimal,
}

/// Canonical paginated envelope for `GET /sales`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesPage {
    pub sales: Vec<Sale>,
    pub total: i64,
    pub page: u32,
    pub pages: u32,
}

/// Entry in the top-sellers ranking of the dashboard report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopProduct {
    pub name: String,
    pub total_sold: i64,
}

/// Aggregate dashboard metrics from `GET /sales/reports/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesSummary {
    pub today_sales: Decimal,
    pub month_sales: Decimal,
    pub total_sales: Decimal,
    pub today_count: i64,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}
