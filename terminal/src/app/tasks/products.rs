//! # Product Tasks
//!
//! Catalog fetches for the register and management screens, plus
//! product create/update/delete and stock adjustments.
//!
//! Both list fetches are sequence-numbered: every new request bumps the
//! screen's `request_seq`, and the event handler drops responses that
//! carry an older number, so a slow early response can never overwrite
//! a fresher list.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ProductPayload;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;
use crate::utils::validation;

/// Fetch the catalog for the register screen, filtered by its search box.
pub(crate) fn fetch_register_products(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, seq, search) = {
        let mut state = state.write();
        state.register.request_seq += 1;
        state.register.loading = true;
        state.register.error = None;
        (
            state.api_client.clone(),
            state.register.request_seq,
            state.register.search.clone(),
        )
    };

    let Some(api_client) = api_client else {
        state.write().register.loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .list_products(Some(search), None)
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx
            .send(AppEvent::RegisterProductsLoaded { seq, result })
            .await;
    });
}

/// Fetch the product list for the management screen, with its search
/// term and category filter applied.
pub(crate) fn fetch_admin_products(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, seq, search, category_id) = {
        let mut state = state.write();
        state.products.request_seq += 1;
        state.products.loading = true;
        state.products.error = None;
        (
            state.api_client.clone(),
            state.products.request_seq,
            state.products.search.clone(),
            state.products.category_filter,
        )
    };

    let Some(api_client) = api_client else {
        state.write().products.loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .list_products(Some(search), category_id)
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx
            .send(AppEvent::AdminProductsLoaded { seq, result })
            .await;
    });
}

/// Validate the product dialog and submit a create or update.
///
/// Validation failures stay inside the dialog and never reach the
/// network.
pub(crate) fn save_product(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, editing_id, payload) = {
        let mut state = state.write();
        let Some(dialog) = state.products.dialog.as_mut() else {
            return;
        };
        if dialog.saving {
            return;
        }

        let name = dialog.name.trim().to_string();
        let required = validation::validate_required("Name", &name);
        if !required.is_valid {
            dialog.error = required.error;
            return;
        }
        let price = match validation::parse_price(&dialog.price) {
            Ok(price) => price,
            Err(error) => {
                dialog.error = Some(error.to_string());
                return;
            }
        };
        let stock = match validation::parse_stock(&dialog.stock) {
            Ok(stock) => stock,
            Err(error) => {
                dialog.error = Some(error.to_string());
                return;
            }
        };

        let description = dialog.description.trim();
        let payload = ProductPayload {
            name,
            description: (!description.is_empty()).then(|| description.to_string()),
            price,
            stock,
            category_id: dialog.category_id,
        };

        dialog.saving = true;
        dialog.error = None;
        let editing_id = dialog.editing_id;
        (state.api_client.clone(), editing_id, payload)
    };

    let Some(api_client) = api_client else {
        return;
    };

    runtime::spawn(async move {
        let result = match editing_id {
            Some(id) => api_client.update_product(id, payload).await,
            None => api_client.create_product(payload).await,
        };
        let _ = event_tx
            .send(AppEvent::ProductSaved(result.map_err(|error| error.to_string())))
            .await;
    });
}

/// Delete a product.
pub(crate) fn delete_product(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
) {
    let api_client = state.read().api_client.clone();

    if let Some(api_client) = api_client {
        runtime::spawn(async move {
            let result = api_client
                .delete_product(product_id)
                .await
                .map(|_| product_id)
                .map_err(|error| error.to_string());
            let _ = event_tx.send(AppEvent::ProductDeleted(result)).await;
        });
    }
}

/// Set the absolute stock level of a product.
pub(crate) fn update_stock(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
    stock: i64,
) {
    let api_client = state.read().api_client.clone();

    if let Some(api_client) = api_client {
        runtime::spawn(async move {
            let result = api_client
                .update_stock(product_id, stock)
                .await
                .map_err(|error| error.to_string());
            let _ = event_tx.send(AppEvent::StockUpdated(result)).await;
        });
    }
}
