//! # Product Management Handlers
//!
//! Dialog lifecycle and quick stock adjustments on the product screen.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ProductForm};
use crate::app::tasks;
use crate::utils::validation;

/// Open the dialog empty, for creating a product.
pub(crate) fn open_create_dialog(state: Arc<RwLock<AppState>>) {
    state.write().products.dialog = Some(ProductForm::default());
}

/// Open the dialog pre-filled with an existing product.
pub(crate) fn open_edit_dialog(state: Arc<RwLock<AppState>>, product_id: i64) {
    let mut state = state.write();
    let Some(product) = state
        .products
        .items
        .iter()
        .find(|product| product.id == product_id)
        .cloned()
    else {
        return;
    };
    state.products.dialog = Some(ProductForm::for_edit(&product));
}

/// Close the dialog, discarding edits.
pub(crate) fn close_dialog(state: Arc<RwLock<AppState>>) {
    state.write().products.dialog = None;
}

/// Apply the per-row stock entry for a product.
///
/// Parse failures land next to the row as the screen error; a valid
/// value goes straight to the stock endpoint.
pub(crate) fn apply_stock_edit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
) {
    let stock = {
        let mut state = state.write();
        let Some(entry) = state.products.stock_edits.get(&product_id).cloned() else {
            return;
        };
        match validation::parse_stock(&entry) {
            Ok(stock) => {
                state.products.error = None;
                stock
            }
            Err(error) => {
                state.products.error = Some(error.to_string());
                return;
            }
        }
    };

    tasks::products::update_stock(state, event_tx, product_id, stock);
}
