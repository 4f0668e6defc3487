//! # Register Handlers
//!
//! Cart interactions on the register screen. All stock checks use the
//! freshest catalog snapshot the screen holds; the cart itself is pure
//! and the server has the final word at checkout.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;

/// Add one unit of a product to the cart.
pub(crate) fn handle_add_to_cart(state: Arc<RwLock<AppState>>, product_id: i64) {
    let mut state = state.write();
    let Some(product) = state
        .register
        .products
        .iter()
        .find(|product| product.id == product_id)
        .cloned()
    else {
        return;
    };

    match state.register.cart.add_product(&product) {
        Ok(()) => {
            state.register.error = None;
            state.register.success = None;
        }
        Err(error) => state.register.error = Some(error.to_string()),
    }
}

/// Set the quantity of a cart line, checking against current stock.
pub(crate) fn handle_set_quantity(state: Arc<RwLock<AppState>>, product_id: i64, quantity: i64) {
    let mut state = state.write();
    let current_stock = state
        .register
        .products
        .iter()
        .find(|product| product.id == product_id)
        .map(|product| product.stock);

    match state
        .register
        .cart
        .set_quantity(product_id, quantity, current_stock)
    {
        Ok(()) => state.register.error = None,
        Err(error) => state.register.error = Some(error.to_string()),
    }
}

/// Remove a cart line.
pub(crate) fn handle_remove_line(state: Arc<RwLock<AppState>>, product_id: i64) {
    let mut state = state.write();
    state.register.cart.remove_product(product_id);
    state.register.error = None;
}

/// Empty the cart.
pub(crate) fn handle_clear_cart(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.register.cart.clear();
    state.register.error = None;
    state.register.success = None;
}
