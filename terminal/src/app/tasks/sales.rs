//! # Sales Tasks
//!
//! Checkout submission, sales history pages and the dashboard report.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::services::api::sales::SalesQuery;
use crate::utils::runtime;
use crate::utils::validation;

/// Submit the current cart as a sale.
///
/// An empty cart is rejected locally without any network traffic, and a
/// second click while a submission is in flight is ignored.
pub(crate) fn submit_sale(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, request) = {
        let mut state = state.write();
        if state.register.cart.is_submitting() {
            return;
        }

        let request = match state.register.cart.begin_checkout() {
            Ok(request) => request,
            Err(error) => {
                state.register.error = Some(error.to_string());
                return;
            }
        };

        state.register.cart.set_submitting(true);
        state.register.error = None;
        state.register.success = None;
        (state.api_client.clone(), request)
    };

    let Some(api_client) = api_client else {
        state.write().register.cart.set_submitting(false);
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .create_sale(request)
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::SaleSubmitted(result)).await;
    });
}

/// Fetch a page of the sales history with the screen's date filters.
///
/// Malformed filter dates stay on the screen as `filter_error` and no
/// request is issued.
pub(crate) fn fetch_sales(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, page: u32) {
    let (api_client, seq, query) = {
        let mut state = state.write();

        let start_date = match validation::parse_date_filter(&state.sales.start_date) {
            Ok(start) => start,
            Err(error) => {
                state.sales.filter_error = Some(error.to_string());
                return;
            }
        };
        let end_date = match validation::parse_date_filter(&state.sales.end_date) {
            Ok(end) => end,
            Err(error) => {
                state.sales.filter_error = Some(error.to_string());
                return;
            }
        };

        state.sales.filter_error = None;
        state.sales.request_seq += 1;
        state.sales.loading = true;
        state.sales.error = None;

        let query = SalesQuery {
            page,
            per_page: state.sales.per_page,
            start_date,
            end_date,
        };
        (state.api_client.clone(), state.sales.request_seq, query)
    };

    let Some(api_client) = api_client else {
        state.write().sales.loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .list_sales(query)
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::SalesLoaded { seq, result }).await;
    });
}

/// Fetch one sale with its line items for the detail popup.
pub(crate) fn fetch_sale_detail(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    sale_id: i64,
) {
    let api_client = {
        let mut state = state.write();
        state.sales.detail_loading = true;
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        state.write().sales.detail_loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .sale_detail(sale_id)
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::SaleDetailLoaded(result)).await;
    });
}

/// Fetch the aggregate dashboard metrics.
pub(crate) fn fetch_summary(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.dashboard.loading {
            return;
        }
        state.dashboard.loading = true;
        state.dashboard.error = None;
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        state.write().dashboard.loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .sales_summary()
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::SummaryLoaded(result)).await;
    });
}
