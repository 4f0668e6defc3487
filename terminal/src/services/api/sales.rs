//! # Sales Endpoints
//!
//! Sale registration, paginated history and the dashboard report.

use reqwest::Method;
use shared::{Sale, SaleRequest, SalesPage, SalesSummary};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Query parameters for the paginated sales history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    pub page: u32,
    pub per_page: u32,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            start_date: None,
            end_date: None,
        }
    }
}

/// Register a sale.
///
/// The body carries product ids and quantities only; the server prices
/// each line and decrements stock atomically.
#[tracing::instrument(skip(client, request), fields(item_count = request.items.len()))]
pub async fn create(client: &ApiClient, request: SaleRequest) -> Result<Sale, ApiError> {
    tracing::info!("Submitting sale");
    let result = client
        .send_json::<Sale>(client.request(Method::POST, "/sales").json(&request))
        .await;

    match &result {
        Ok(sale) => tracing::info!(sale_id = sale.id, total = %sale.total_amount, "Sale recorded"),
        Err(error) => tracing::warn!(error = %error, "Sale rejected"),
    }

    result
}

/// Fetch a page of recorded sales.
pub async fn list(client: &ApiClient, query: SalesQuery) -> Result<SalesPage, ApiError> {
    let mut params: Vec<(&str, String)> = vec![
        ("page", query.page.to_string()),
        ("per_page", query.per_page.to_string()),
    ];
    if let Some(start) = query.start_date {
        params.push(("start_date", start));
    }
    if let Some(end) = query.end_date {
        params.push(("end_date", end));
    }

    client
        .send_json(client.request(Method::GET, "/sales").query(&params))
        .await
}

/// Fetch one sale with its line items.
pub async fn detail(client: &ApiClient, id: i64) -> Result<Sale, ApiError> {
    client
        .send_json(client.request(Method::GET, &format!("/sales/{}", id)))
        .await
}

/// Fetch aggregate dashboard metrics.
pub async fn summary(client: &ApiClient) -> Result<SalesSummary, ApiError> {
    client
        .send_json(client.request(Method::GET, "/sales/reports/summary"))
        .await
}
